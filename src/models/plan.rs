use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Macro, MacroRange, MealCategory, MealRecord};

/// Calorie allowance per category for one allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBudget {
    allowances: BTreeMap<MealCategory, f64>,
}

impl CategoryBudget {
    pub fn new(allowances: BTreeMap<MealCategory, f64>) -> Self {
        Self { allowances }
    }

    /// Allowance for a category; unconfigured categories get nothing.
    pub fn allowance(&self, category: MealCategory) -> f64 {
        self.allowances.get(&category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealCategory, f64)> + '_ {
        self.allowances.iter().map(|(c, a)| (*c, *a))
    }

    pub fn total(&self) -> f64 {
        self.allowances.values().sum()
    }
}

/// Aggregate macro-nutrients of a plan, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub protein: f64,
    pub carb: f64,
    pub fat: f64,
}

impl NutrientTotals {
    pub fn add(&mut self, meal: &MealRecord) {
        self.protein += meal.protein_g;
        self.carb += meal.carb_g;
        self.fat += meal.fat_g;
    }

    pub fn get(&self, which: Macro) -> f64 {
        match which {
            Macro::Protein => self.protein,
            Macro::Carb => self.carb,
            Macro::Fat => self.fat,
        }
    }
}

/// An aggregate macro total that fell outside its supplied range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroViolation {
    pub nutrient: Macro,
    pub total: f64,
    pub range: MacroRange,
}

impl MacroViolation {
    pub fn is_above(&self) -> bool {
        self.total > self.range.max
    }
}

/// A generated plan for one day.
///
/// Every configured category has an entry, possibly empty. Meals within a
/// category are in selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealPlan {
    pub meals: BTreeMap<MealCategory, Vec<MealRecord>>,
    pub budget: CategoryBudget,
    pub total_calories: f64,
    pub total_nutrients: NutrientTotals,
    pub violations: Vec<MacroViolation>,
}

impl MealPlan {
    pub fn meals_for(&self, category: MealCategory) -> &[MealRecord] {
        self.meals.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn category_calories(&self, category: MealCategory) -> f64 {
        self.meals_for(category).iter().map(|m| m.calories).sum()
    }

    /// Number of selected meals across all categories.
    pub fn len(&self) -> usize {
        self.meals.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
