use super::rules::rules_for;
use super::types::{Input, AGE_MAX, AGE_MIN};

/// Sanity-check an input before scoring.
/// Returns all findings at once (not just the first). These are warnings,
/// not rejections: the engine accepts any numeric input and the final
/// clamp still bounds the aggregate, but off-scale values usually mean a
/// typo and deserve a note on stderr.
pub fn validate_input(input: &Input) -> Result<(), Vec<String>> {
    let mut warnings = Vec::new();

    if input.age < AGE_MIN || input.age > AGE_MAX {
        warnings.push(format!(
            "age: {} is outside the calibrated {}-{} range; extrapolating",
            input.age, AGE_MIN, AGE_MAX
        ));
    }

    for rule in &rules_for(input.category).rules {
        if let Some(raw) = (rule.rating)(input) {
            if !(1.0..=10.0).contains(&raw) {
                warnings.push(format!(
                    "{}: rating {} is outside the 1-10 scale; applying as-is",
                    rule.name, raw
                ));
            }
        }
    }

    if warnings.is_empty() {
        Ok(())
    } else {
        Err(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::Category;

    #[test]
    fn test_well_formed_input() {
        let mut input = Input::new(Category::Endurance, 30);
        input.sponsorship = Some(7.0);
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_defaulted_ratings_do_not_warn() {
        assert!(validate_input(&Input::new(Category::Sprint, 24)).is_ok());
    }

    #[test]
    fn test_age_outside_calibration() {
        let result = validate_input(&Input::new(Category::Endurance, 70));
        let warnings = result.unwrap_err();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("age"));
    }

    #[test]
    fn test_off_scale_rating() {
        let mut input = Input::new(Category::Sprint, 24);
        input.injuries = Some(15.0);
        let warnings = validate_input(&input).unwrap_err();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Injury History"));
    }

    #[test]
    fn test_other_category_ratings_never_checked() {
        let mut input = Input::new(Category::Sprint, 24);
        input.sponsorship = Some(999.0); // endurance-scoped, ignored
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_collects_all_warnings() {
        let mut input = Input::new(Category::Endurance, 12);
        input.sponsorship = Some(0.0);
        input.conditioning = Some(11.0);
        let warnings = validate_input(&input).unwrap_err();
        assert_eq!(warnings.len(), 3);
    }
}
