use std::fmt;

use serde::Serialize;

use crate::models::{ActivityLevel, Gender, Goal, MacroRanges, PatientProfile};
use crate::planner::constants::*;

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_MAX {
            BmiClass::Underweight
        } else if bmi < BMI_NORMAL_MAX {
            BmiClass::Normal
        } else if bmi < BMI_OVERWEIGHT_MAX {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        };
        f.write_str(name)
    }
}

/// Body mass index: weight (kg) / height (m)².
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Ideal weight used when resolving the Fitness goal.
///
/// 50 kg (male) or 45.5 kg (female) plus 0.91 kg per cm over 152.4 cm.
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> Option<f64> {
    let base = match gender {
        Gender::Male => IDEAL_WEIGHT_MALE_BASE,
        Gender::Female => IDEAL_WEIGHT_FEMALE_BASE,
        Gender::Other => return None,
    };
    Some(base + IDEAL_WEIGHT_KG_PER_CM * (height_cm - IDEAL_WEIGHT_BASE_HEIGHT_CM))
}

/// Devine ideal body weight: base plus 2.3 kg per inch over five feet.
pub fn calculate_devine_ideal_weight(height_cm: f64, gender: Gender) -> Option<f64> {
    let base = match gender {
        Gender::Male => IDEAL_WEIGHT_MALE_BASE,
        Gender::Female => IDEAL_WEIGHT_FEMALE_BASE,
        Gender::Other => return None,
    };
    Some(base + DEVINE_KG_PER_INCH * (height_cm * INCHES_PER_CM - DEVINE_BASE_INCHES))
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> Option<f64> {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
        Gender::Other => return None,
    };
    Some(10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset)
}

/// Total daily energy expenditure, kcal/day.
#[inline]
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity_factor(activity)
}

/// Total body water in liters.
pub fn calculate_tbw(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> Option<f64> {
    let k = match gender {
        Gender::Male => 2.447 - 0.09516 * age as f64 + 0.1074 * height_cm + 0.3362 * weight_kg,
        Gender::Female => -2.097 + 0.1069 * height_cm + 0.2466 * weight_kg,
        Gender::Other => return None,
    };
    Some(0.3669 * k - 0.0906 * weight_kg + 0.1074 * height_cm + 0.2466 * weight_kg)
}

#[inline]
pub fn calculate_body_fat_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (body_fat_percent / 100.0)
}

/// Resolve goals to concrete weight-loss / weight-gain intents.
///
/// Fitness becomes weight gain below the ideal weight and weight loss above it.
/// Rapid weight loss implies weight loss.
fn resolve_goals(goals: &[Goal], weight_kg: f64, ideal_weight: Option<f64>) -> (bool, bool, bool) {
    let mut loss = goals.contains(&Goal::WeightLoss);
    let mut gain = goals.contains(&Goal::WeightGain);
    let rapid = goals.contains(&Goal::RapidWeightLoss);

    if goals.contains(&Goal::Fitness) {
        if let Some(ideal) = ideal_weight {
            if weight_kg < ideal {
                gain = true;
            } else if weight_kg > ideal {
                loss = true;
            }
        }
    }

    if rapid {
        loss = true;
    }

    (loss, gain, rapid)
}

/// Recommended daily calorie intake for the selected goals.
///
/// Weight loss wins over weight gain when both are selected.
pub fn calculate_calorie_intake(
    tdee: f64,
    goals: &[Goal],
    weight_kg: f64,
    ideal_weight: Option<f64>,
) -> f64 {
    let (loss, gain, rapid) = resolve_goals(goals, weight_kg, ideal_weight);

    if loss {
        if rapid {
            tdee - RAPID_WEIGHT_LOSS_DEFICIT
        } else {
            tdee - WEIGHT_LOSS_DEFICIT
        }
    } else if gain {
        tdee + WEIGHT_GAIN_SURPLUS
    } else {
        tdee
    }
}

/// Daily macro ranges for the selected goals.
///
/// When several goals carry ranges, the last in [`GOAL_RANGE_PRECEDENCE`] wins.
pub fn macro_ranges_for(goals: &[Goal]) -> Option<MacroRanges> {
    GOAL_RANGE_PRECEDENCE
        .iter()
        .filter(|g| goals.contains(*g))
        .filter_map(|g| goal_macro_ranges(*g))
        .last()
}

/// Every derived metric for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct BodyMetrics {
    pub bmi: f64,
    pub bmi_class: BmiClass,
    pub body_fat_mass_kg: f64,
    pub ideal_weight_kg: Option<f64>,
    pub devine_ideal_weight_kg: Option<f64>,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
    pub tbw_liters: Option<f64>,
    pub calorie_intake: Option<f64>,
}

impl BodyMetrics {
    pub fn compute(profile: &PatientProfile, goals: &[Goal]) -> Self {
        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
        let ideal_weight = calculate_ideal_weight(profile.height_cm, profile.gender);
        let bmr = calculate_bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.gender,
        );
        let tdee = bmr.map(|b| calculate_tdee(b, profile.activity));
        let calorie_intake =
            tdee.map(|t| calculate_calorie_intake(t, goals, profile.weight_kg, ideal_weight));

        Self {
            bmi,
            bmi_class: BmiClass::from_bmi(bmi),
            body_fat_mass_kg: calculate_body_fat_mass(profile.weight_kg, profile.body_fat_percent),
            ideal_weight_kg: ideal_weight,
            devine_ideal_weight_kg: calculate_devine_ideal_weight(
                profile.height_cm,
                profile.gender,
            ),
            bmr,
            tdee,
            tbw_liters: calculate_tbw(
                profile.weight_kg,
                profile.height_cm,
                profile.age,
                profile.gender,
            ),
            calorie_intake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_class_bands() {
        assert_eq!(BmiClass::from_bmi(18.4), BmiClass::Underweight);
        assert_eq!(BmiClass::from_bmi(18.5), BmiClass::Normal);
        assert_eq!(BmiClass::from_bmi(25.0), BmiClass::Overweight);
        assert_eq!(BmiClass::from_bmi(30.0), BmiClass::Obese);
    }

    #[test]
    fn test_other_gender_has_no_bmr() {
        assert!(calculate_bmr(70.0, 170.0, 30, Gender::Other).is_none());
        assert!(calculate_ideal_weight(170.0, Gender::Other).is_none());
        assert!(calculate_tbw(70.0, 170.0, 30, Gender::Other).is_none());
    }

    #[test]
    fn test_rapid_loss_deficit() {
        let intake = calculate_calorie_intake(
            2500.0,
            &[Goal::WeightLoss, Goal::RapidWeightLoss],
            80.0,
            None,
        );
        assert!((intake - 1500.0).abs() < 0.001);

        let rapid_only = calculate_calorie_intake(2500.0, &[Goal::RapidWeightLoss], 80.0, None);
        assert!((rapid_only - 1500.0).abs() < 0.001);
    }

    #[test]
    fn test_fitness_resolves_against_ideal_weight() {
        let below = calculate_calorie_intake(2000.0, &[Goal::Fitness], 60.0, Some(70.0));
        assert!((below - 2500.0).abs() < 0.001);

        let above = calculate_calorie_intake(2000.0, &[Goal::Fitness], 80.0, Some(70.0));
        assert!((above - 1500.0).abs() < 0.001);

        let at = calculate_calorie_intake(2000.0, &[Goal::Fitness], 70.0, Some(70.0));
        assert!((at - 2000.0).abs() < 0.001);
    }

    #[test]
    fn test_macro_ranges_precedence() {
        assert!(macro_ranges_for(&[]).is_none());
        assert!(macro_ranges_for(&[Goal::Fitness]).is_none());

        let ranges = macro_ranges_for(&[Goal::Maintenance, Goal::WeightLoss]).unwrap();
        // Maintenance comes later in precedence than weight loss
        assert_eq!(ranges.fat.unwrap().max, 15.0);
    }
}
