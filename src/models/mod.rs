mod macros;
mod meal;
mod plan;
mod profile;

pub use macros::{Macro, MacroRange, MacroRanges};
pub use meal::{MealCategory, MealRecord};
pub use plan::{CategoryBudget, MacroViolation, MealPlan, NutrientTotals};
pub use profile::{ActivityLevel, Gender, Goal, PatientProfile};
