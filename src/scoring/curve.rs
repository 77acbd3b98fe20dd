use super::types::Category;

/// Base score for an age, before any multipliers.
///
/// Total over all ages: values outside the calibrated 18-60 window fall
/// through to the constant head or the floored tail of the curve rather
/// than erroring.
pub fn base_score(category: Category, age: u32) -> f64 {
    match category {
        Category::Endurance => endurance_curve(age),
        Category::Sprint => sprint_curve(age),
    }
}

/// Late-peak curve: slow rise from 18, plateau at 9.0 over 36-38, then a
/// gentle decline with a floor of 1.
fn endurance_curve(age: u32) -> f64 {
    let a = age as f64;
    if age < 18 {
        3.0
    } else if age < 25 {
        4.0 + (a - 18.0) * 0.2 // 18-24: 4.0 -> 5.2
    } else if age < 30 {
        5.4 + (a - 25.0) * 0.3 // 25-29: 5.4 -> 6.6
    } else if age < 36 {
        6.9 + (a - 30.0) * 0.35 // 30-35: 6.9 -> 8.6
    } else if age <= 38 {
        9.0 // peak plateau
    } else if age < 45 {
        9.0 - (a - 38.0) * 0.1
    } else if age < 60 {
        8.3 - (a - 45.0) * 0.2
    } else {
        (5.3 - (a - 60.0) * 0.1).max(1.0)
    }
}

/// Early-peak curve: 9.5 plateau over 22-24, then decline with a
/// deliberate step down to 6.0 at exactly age 30. The single-point
/// discontinuity is a domain rule, not interpolation error.
fn sprint_curve(age: u32) -> f64 {
    let a = age as f64;
    if age < 18 {
        6.0
    } else if age <= 21 {
        7.0 + (a - 18.0) * 0.5 // 18-21: 7.0 -> 8.5
    } else if age <= 24 {
        9.5 // peak
    } else if age < 27 {
        9.0 - (a - 24.0) * 0.3 // 25-26: slight dip
    } else if age < 30 {
        8.1 - (a - 27.0) * 0.5 // 27-29: pre-step drop
    } else if age == 30 {
        6.0 // the step
    } else if age < 40 {
        6.0 - (a - 30.0) * 0.2
    } else {
        (4.0 - (a - 40.0) * 0.15).max(1.0)
    }
}
