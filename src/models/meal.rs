use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of meal categories a day plan is split into.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealCategory {
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snacks,
    ];

    /// Resolve a catalog label (English or Arabic) to a category.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label.to_lowercase().as_str() {
            "breakfast" | "الفطار" | "الفطور" => Some(MealCategory::Breakfast),
            "lunch" | "الغداء" => Some(MealCategory::Lunch),
            "dinner" | "العشاء" => Some(MealCategory::Dinner),
            "snacks" | "snack" | "السناكس" => Some(MealCategory::Snacks),
            _ => None,
        }
    }

    /// Arabic label as it appears in the bundled catalog.
    pub fn arabic_label(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "الفطار",
            MealCategory::Lunch => "الغداء",
            MealCategory::Dinner => "العشاء",
            MealCategory::Snacks => "السناكس",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snacks => "Snacks",
        };
        f.write_str(name)
    }
}

/// A single row of the meal catalog.
///
/// `category` keeps the raw label from the source; use [`MealRecord::meal_category`]
/// to resolve it. Rows whose label does not resolve never enter a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "Meal Name")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Ingredients", default)]
    pub ingredients: String,

    #[serde(rename = "Weight (g)")]
    pub weight_g: f64,

    #[serde(rename = "Protein (g)")]
    pub protein_g: f64,

    #[serde(rename = "Carbohydrates (g)")]
    pub carb_g: f64,

    #[serde(rename = "Fat (g)")]
    pub fat_g: f64,

    #[serde(rename = "Meal Type", default)]
    pub meal_type: String,
}

impl MealRecord {
    #[inline]
    pub fn meal_category(&self) -> Option<MealCategory> {
        MealCategory::from_label(&self.category)
    }

    /// Non-negative, finite numeric columns.
    pub fn is_valid(&self) -> bool {
        [
            self.calories,
            self.weight_g,
            self.protein_g,
            self.carb_g,
            self.fat_g,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, P:{} C:{} F:{}",
            self.name, self.category, self.calories, self.protein_g, self.carb_g, self.fat_g
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> MealRecord {
        MealRecord {
            name: "فول مدمس".to_string(),
            category: "الفطار".to_string(),
            calories: 250.0,
            ingredients: "فول، زيت زيتون، كمون".to_string(),
            weight_g: 200.0,
            protein_g: 13.0,
            carb_g: 35.0,
            fat_g: 7.0,
            meal_type: "vegetarian".to_string(),
        }
    }

    #[test]
    fn test_from_label_english_and_arabic() {
        assert_eq!(MealCategory::from_label("Breakfast"), Some(MealCategory::Breakfast));
        assert_eq!(MealCategory::from_label("  LUNCH "), Some(MealCategory::Lunch));
        assert_eq!(MealCategory::from_label("العشاء"), Some(MealCategory::Dinner));
        assert_eq!(MealCategory::from_label("السناكس"), Some(MealCategory::Snacks));
        assert_eq!(MealCategory::from_label("Brunch"), None);
    }

    #[test]
    fn test_arabic_label_roundtrips() {
        for category in MealCategory::ALL {
            assert_eq!(MealCategory::from_label(category.arabic_label()), Some(category));
        }
    }

    #[test]
    fn test_meal_category() {
        let meal = sample_meal();
        assert_eq!(meal.meal_category(), Some(MealCategory::Breakfast));

        let mut unknown = sample_meal();
        unknown.category = "Dessert".to_string();
        assert_eq!(unknown.meal_category(), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_meal().is_valid());

        let mut negative = sample_meal();
        negative.fat_g = -1.0;
        assert!(!negative.is_valid());

        let mut nan = sample_meal();
        nan.calories = f64::NAN;
        assert!(!nan.is_valid());
    }
}
