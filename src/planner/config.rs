use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::models::{CategoryBudget, MealCategory};
use crate::planner::constants::*;

/// Named category splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FractionPreset {
    #[default]
    Standard,
    LightLunch,
}

/// Share of the daily calorie intake given to each category.
///
/// Fractions are expected to sum to about 1.0 but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryFractions {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snacks: f64,
}

impl CategoryFractions {
    pub fn from_preset(preset: FractionPreset) -> Self {
        match preset {
            FractionPreset::Standard => Self {
                breakfast: STANDARD_BREAKFAST_FRACTION,
                lunch: STANDARD_LUNCH_FRACTION,
                dinner: STANDARD_DINNER_FRACTION,
                snacks: STANDARD_SNACKS_FRACTION,
            },
            FractionPreset::LightLunch => Self {
                breakfast: LIGHT_LUNCH_BREAKFAST_FRACTION,
                lunch: LIGHT_LUNCH_LUNCH_FRACTION,
                dinner: LIGHT_LUNCH_DINNER_FRACTION,
                snacks: LIGHT_LUNCH_SNACKS_FRACTION,
            },
        }
    }

    pub fn fraction(&self, category: MealCategory) -> f64 {
        match category {
            MealCategory::Breakfast => self.breakfast,
            MealCategory::Lunch => self.lunch,
            MealCategory::Dinner => self.dinner,
            MealCategory::Snacks => self.snacks,
        }
    }

    pub fn sum(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snacks
    }

    /// Split a daily calorie intake into per-category allowances.
    pub fn budget(&self, calorie_intake: f64) -> CategoryBudget {
        let sum = self.sum();
        if (sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
            warn!(sum, "category fractions do not sum to 1.0");
        }

        let allowances: BTreeMap<MealCategory, f64> = MealCategory::ALL
            .into_iter()
            .map(|c| (c, calorie_intake * self.fraction(c)))
            .collect();
        CategoryBudget::new(allowances)
    }
}

impl Default for CategoryFractions {
    fn default() -> Self {
        Self::from_preset(FractionPreset::Standard)
    }
}

/// Which greedy walk fills the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationStrategy {
    /// Shuffle and walk each category independently.
    #[default]
    PerCategory,
    /// Shuffle the whole catalog once; each meal is tried against its own category only.
    CrossCategory,
}

/// How supplied macro ranges are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MacroMode {
    /// Drop candidate meals whose own macros fall outside a range.
    PreFilter,
    /// Keep all candidates; flag plan totals that fall outside a range.
    Aggregate,
    /// Pre-filter candidates and flag plan totals.
    #[default]
    Both,
}

impl MacroMode {
    pub fn filters_meals(&self) -> bool {
        matches!(self, MacroMode::PreFilter | MacroMode::Both)
    }

    pub fn checks_totals(&self) -> bool {
        matches!(self, MacroMode::Aggregate | MacroMode::Both)
    }
}

/// Planner configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub fractions: CategoryFractions,
    pub strategy: AllocationStrategy,
    pub macro_mode: MacroMode,
}

impl PlannerConfig {
    pub fn with_strategy(mut self, strategy: AllocationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_macro_mode(mut self, macro_mode: MacroMode) -> Self {
        self.macro_mode = macro_mode;
        self
    }
}

/// Load a planner configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PlannerConfig = serde_json::from_str(&content)?;
    Ok(config)
}
