use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extra active",
        };
        f.write_str(name)
    }
}

/// Dietary goals. Several may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Goal {
    WeightLoss,
    WeightGain,
    Maintenance,
    Fitness,
    RapidWeightLoss,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::WeightLoss,
        Goal::WeightGain,
        Goal::Maintenance,
        Goal::Fitness,
        Goal::RapidWeightLoss,
    ];
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Goal::WeightLoss => "Weight loss",
            Goal::WeightGain => "Weight gain",
            Goal::Maintenance => "Maintenance",
            Goal::Fitness => "Fitness",
            Goal::RapidWeightLoss => "Rapid weight loss",
        };
        f.write_str(name)
    }
}

/// Anthropometric inputs for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub body_fat_percent: f64,
    pub activity: ActivityLevel,
}

impl PatientProfile {
    /// Basic validation: positive body measurements and a sane fat percentage.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(format!("weight must be positive, got {}", self.weight_kg));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(format!("height must be positive, got {}", self.height_cm));
        }
        if !(0.0..=100.0).contains(&self.body_fat_percent) {
            return Err(format!(
                "body fat percentage must be within 0-100, got {}",
                self.body_fat_percent
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> PatientProfile {
        PatientProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 30,
            gender: Gender::Male,
            body_fat_percent: 20.0,
            activity: ActivityLevel::ModeratelyActive,
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut p = sample_profile();
        p.height_cm = 0.0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.body_fat_percent = 120.0;
        assert!(p.validate().is_err());
    }
}
