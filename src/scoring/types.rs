use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Neutral midpoint used when a rating is not supplied.
pub const DEFAULT_RATING: f64 = 5.0;

/// Youngest age the curves are calibrated for.
pub const AGE_MIN: u32 = 18;

/// Oldest age the curves are calibrated for.
pub const AGE_MAX: u32 = 60;

/// Discipline tag selecting which curve and rule set applies.
///
/// Serialized as stable uppercase tokens since they participate in stored
/// record identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    /// Late-peak discipline: slow rise, plateau at 36-38, gentle decline.
    #[serde(rename = "ENDURANCE")]
    Endurance,
    /// Early-peak discipline: peak at 21-24, step down at exactly 30.
    #[serde(rename = "SPRINT")]
    Sprint,
}

impl Category {
    /// Stable token used at the persistence boundary.
    pub fn token(&self) -> &'static str {
        match self {
            Category::Endurance => "ENDURANCE",
            Category::Sprint => "SPRINT",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// One athlete profile to appraise.
///
/// Ratings are conceptually on a 1-10 scale and category-scoped: only the
/// three belonging to `category` are consulted, the rest are ignored.
/// A missing rating means "use the midpoint", not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub category: Category,
    pub age: u32,
    // Endurance ratings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorship: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactics: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditioning: Option<f64>,
    // Sprint ratings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explosiveness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injuries: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composure: Option<f64>,
}

impl Input {
    /// Bare input with every rating left at its default.
    pub fn new(category: Category, age: u32) -> Self {
        Self {
            category,
            age,
            sponsorship: None,
            tactics: None,
            conditioning: None,
            explosiveness: None,
            injuries: None,
            composure: None,
        }
    }
}

/// Direction of a multiplier's effect on the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    /// Reserved for an identity multiplier; no current rule produces it.
    Neutral,
}

impl Impact {
    pub fn from_multiplier(value: f64) -> Self {
        if value >= 1.0 {
            Impact::Positive
        } else {
            Impact::Negative
        }
    }
}

/// One applied adjustment, kept for audit and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRecord {
    /// Human label, e.g. "Sponsorship & Profile".
    pub name: String,
    /// The multiplier actually applied (post-floor where a rule has one).
    pub value: f64,
    /// The raw 1-10 rating consulted, unclamped.
    pub raw_score: f64,
    pub impact: Impact,
}

/// The outcome of one scoring run. Immutable once created; the history
/// store assigns an id around it but never touches the score fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    pub timestamp: DateTime<Utc>,
    pub input: Input,
    /// Curve value before multipliers; the curves keep this in range
    /// themselves, so it is never clamped here.
    pub base_score: f64,
    /// Aggregate after all multipliers, clamped to [1, 10].
    pub final_score: f64,
    /// Application order, exactly one entry per rule.
    pub multipliers: Vec<MultiplierRecord>,
}

/// One sampled point of a base curve, no multipliers applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub age: u32,
    pub score: f64,
}
