use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::MealRecord;

/// The three macro-nutrients the planner can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Macro {
    Protein,
    Carb,
    Fat,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Protein, Macro::Carb, Macro::Fat];

    /// Grams of this macro in a single meal.
    pub fn grams(&self, meal: &MealRecord) -> f64 {
        match self {
            Macro::Protein => meal.protein_g,
            Macro::Carb => meal.carb_g,
            Macro::Fat => meal.fat_g,
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Macro::Protein => "Protein",
            Macro::Carb => "Carbohydrates",
            Macro::Fat => "Fat",
        };
        f.write_str(name)
    }
}

/// Inclusive `[min, max]` bound in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    pub min: f64,
    pub max: f64,
}

impl MacroRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, grams: f64) -> bool {
        grams >= self.min && grams <= self.max
    }
}

impl fmt::Display for MacroRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} g", self.min, self.max)
    }
}

/// Optional range per macro. A `None` entry is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroRanges {
    pub protein: Option<MacroRange>,
    pub carb: Option<MacroRange>,
    pub fat: Option<MacroRange>,
}

impl MacroRanges {
    pub fn get(&self, which: Macro) -> Option<MacroRange> {
        match which {
            Macro::Protein => self.protein,
            Macro::Carb => self.carb,
            Macro::Fat => self.fat,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.protein.is_none() && self.carb.is_none() && self.fat.is_none()
    }

    /// True when every supplied range contains the meal's grams.
    pub fn admits(&self, meal: &MealRecord) -> bool {
        Macro::ALL.into_iter().all(|m| match self.get(m) {
            Some(range) => range.contains(m.grams(meal)),
            None => true,
        })
    }
}
