use chrono::Utc;

use super::rules::rules_for;
use super::types::{Appraisal, Impact, Input, MultiplierRecord, DEFAULT_RATING};

/// Displayed scores are clamped to this range; intermediates are not.
const SCORE_FLOOR: f64 = 1.0;
const SCORE_CEIL: f64 = 10.0;

/// Appraise one profile.
///
/// Never fails for a well-formed input: missing ratings default to the
/// midpoint, and the final score is clamped to [1, 10] no matter what the
/// intermediate multipliers did. Ratings outside the nominal 1-10 scale
/// are not rejected here; they propagate arithmetically and only the
/// aggregate is bounded (the injury rule's own floor aside).
pub fn appraise(input: &Input) -> Appraisal {
    let table = rules_for(input.category);
    let base_score = (table.curve)(input.age);

    let mut score = base_score;
    let mut multipliers = Vec::with_capacity(table.rules.len());

    for rule in &table.rules {
        let raw_score = (rule.rating)(input).unwrap_or(DEFAULT_RATING);
        let mut value = (rule.multiplier)(raw_score);
        if let Some(floor) = rule.floor {
            value = value.max(floor);
        }
        score *= value;
        multipliers.push(MultiplierRecord {
            name: rule.name.to_string(),
            value,
            raw_score,
            impact: Impact::from_multiplier(value),
        });
    }

    Appraisal {
        timestamp: Utc::now(),
        input: input.clone(),
        base_score,
        final_score: score.clamp(SCORE_FLOOR, SCORE_CEIL),
        multipliers,
    }
}
