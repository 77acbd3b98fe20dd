pub mod curve;
pub mod engine;
pub mod rules;
pub mod sampler;
pub mod types;
pub mod validation;

pub use curve::base_score;
pub use engine::appraise;
pub use sampler::sample_curve;
pub use types::{
    Appraisal, Category, CurvePoint, Impact, Input, MultiplierRecord, AGE_MAX, AGE_MIN,
    DEFAULT_RATING,
};
pub use validation::validate_input;
