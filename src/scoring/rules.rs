use super::curve::base_score;
use super::types::{Category, Input};

/// One adjustment rule: which rating it reads, how that rating becomes a
/// multiplier, and an optional floor on the applied value.
pub struct Rule {
    /// Human label carried onto the MultiplierRecord.
    pub name: &'static str,
    /// Accessor for the category-scoped rating this rule consults.
    pub rating: fn(&Input) -> Option<f64>,
    /// Raw 1-10 rating to multiplier, before any floor.
    pub multiplier: fn(f64) -> f64,
    /// Lower bound on the applied multiplier, where the rule has one.
    pub floor: Option<f64>,
}

/// Everything the engine needs for one category: its curve and its
/// ordered adjustment rules. Adding a category means adding one table
/// below, not editing existing branches.
pub struct CategoryRules {
    pub curve: fn(u32) -> f64,
    pub rules: [Rule; 3],
}

static ENDURANCE_RULES: CategoryRules = CategoryRules {
    curve: |age| base_score(Category::Endurance, age),
    rules: [
        Rule {
            name: "Sponsorship & Profile",
            rating: |input| input.sponsorship,
            multiplier: |raw| 0.5 + raw / 10.0, // 0.6x to 1.5x
            floor: None,
        },
        Rule {
            name: "Tactical Ability",
            rating: |input| input.tactics,
            multiplier: |raw| 0.7 + (raw / 10.0) * 0.8, // 0.78x to 1.5x
            floor: None,
        },
        Rule {
            name: "Conditioning",
            rating: |input| input.conditioning,
            multiplier: |raw| 0.8 + (raw / 10.0) * 0.4, // 0.84x to 1.2x
            floor: None,
        },
    ],
};

static SPRINT_RULES: CategoryRules = CategoryRules {
    curve: |age| base_score(Category::Sprint, age),
    rules: [
        Rule {
            name: "Explosiveness",
            rating: |input| input.explosiveness,
            multiplier: |raw| 0.5 + raw / 10.0, // 0.6x to 1.5x
            floor: None,
        },
        // Inverted polarity: a low injury rating (clean record) is
        // favorable (1.2x at raw 1), a high one penalizes (0.6x at raw 10).
        Rule {
            name: "Injury History",
            rating: |input| input.injuries,
            multiplier: |raw| 1.2 - (raw - 1.0) * 0.066,
            floor: Some(0.5),
        },
        Rule {
            name: "Composure",
            rating: |input| input.composure,
            multiplier: |raw| 0.8 + (raw / 10.0) * 0.4, // 0.84x to 1.2x
            floor: None,
        },
    ],
};

/// Rule table for a category.
pub fn rules_for(category: Category) -> &'static CategoryRules {
    match category {
        Category::Endurance => &ENDURANCE_RULES,
        Category::Sprint => &SPRINT_RULES,
    }
}
