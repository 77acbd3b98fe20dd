use super::curve::base_score;
use super::types::{Category, CurvePoint, AGE_MAX, AGE_MIN};

/// Sample the full base curve for a category: one point per integer age
/// from 18 to 60 inclusive, ascending. Derived on every call, no state.
pub fn sample_curve(category: Category) -> Vec<CurvePoint> {
    (AGE_MIN..=AGE_MAX)
        .map(|age| CurvePoint {
            age,
            score: base_score(category, age),
        })
        .collect()
}
