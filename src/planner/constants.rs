use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Goal, MacroRange, MacroRanges};

// ─────────────────────────────────────────────────────────────────────────────
// Category fractions
// ─────────────────────────────────────────────────────────────────────────────

/// Standard split: breakfast 20%, lunch 40%, dinner 30%, snacks 10%.
pub const STANDARD_BREAKFAST_FRACTION: f64 = 0.20;
pub const STANDARD_LUNCH_FRACTION: f64 = 0.40;
pub const STANDARD_DINNER_FRACTION: f64 = 0.30;
pub const STANDARD_SNACKS_FRACTION: f64 = 0.10;

/// Lighter lunch split: breakfast 25%, lunch 35%, dinner 30%, snacks 10%.
pub const LIGHT_LUNCH_BREAKFAST_FRACTION: f64 = 0.25;
pub const LIGHT_LUNCH_LUNCH_FRACTION: f64 = 0.35;
pub const LIGHT_LUNCH_DINNER_FRACTION: f64 = 0.30;
pub const LIGHT_LUNCH_SNACKS_FRACTION: f64 = 0.10;

/// Fractions further than this from 1.0 in total are logged as suspicious.
pub const FRACTION_SUM_TOLERANCE: f64 = 0.01;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie goals
// ─────────────────────────────────────────────────────────────────────────────

pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;
pub const RAPID_WEIGHT_LOSS_DEFICIT: f64 = 1000.0;
pub const WEIGHT_GAIN_SURPLUS: f64 = 500.0;

/// Days in a weekly plan.
pub const WEEK_DAYS: usize = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Body metric formulas
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor gender offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Ideal weight base in kg at 152.4 cm (five feet).
pub const IDEAL_WEIGHT_MALE_BASE: f64 = 50.0;
pub const IDEAL_WEIGHT_FEMALE_BASE: f64 = 45.5;
pub const IDEAL_WEIGHT_BASE_HEIGHT_CM: f64 = 152.4;
pub const IDEAL_WEIGHT_KG_PER_CM: f64 = 0.91;

/// Devine formula: 2.3 kg per inch over 60 inches.
pub const DEVINE_KG_PER_INCH: f64 = 2.3;
pub const DEVINE_BASE_INCHES: f64 = 60.0;
pub const INCHES_PER_CM: f64 = 0.393701;

pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
pub const BMI_NORMAL_MAX: f64 = 25.0;
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Daily macro ranges per goal, in grams. Fitness has none.
pub static GOAL_MACRO_RANGES: LazyLock<HashMap<Goal, MacroRanges>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(
        Goal::WeightLoss,
        MacroRanges {
            protein: Some(MacroRange::new(0.0, 56.0)),
            carb: Some(MacroRange::new(0.0, 150.0)),
            fat: Some(MacroRange::new(0.0, 35.0)),
        },
    );
    m.insert(
        Goal::WeightGain,
        MacroRanges {
            protein: Some(MacroRange::new(0.0, 136.0)),
            carb: Some(MacroRange::new(0.0, 195.0)),
            fat: Some(MacroRange::new(0.0, 40.0)),
        },
    );
    m.insert(
        Goal::Maintenance,
        MacroRanges {
            protein: Some(MacroRange::new(0.0, 75.0)),
            carb: Some(MacroRange::new(0.0, 163.0)),
            fat: Some(MacroRange::new(0.0, 15.0)),
        },
    );
    m.insert(
        Goal::RapidWeightLoss,
        MacroRanges {
            protein: Some(MacroRange::new(0.0, 113.0)),
            carb: Some(MacroRange::new(0.0, 100.0)),
            fat: Some(MacroRange::new(0.0, 25.0)),
        },
    );
    m
});

/// Order in which goal ranges override one another; later wins.
pub const GOAL_RANGE_PRECEDENCE: [Goal; 4] = [
    Goal::WeightLoss,
    Goal::WeightGain,
    Goal::Maintenance,
    Goal::RapidWeightLoss,
];

/// Get the macro ranges for a single goal.
pub fn goal_macro_ranges(goal: Goal) -> Option<MacroRanges> {
    GOAL_MACRO_RANGES.get(&goal).copied()
}
