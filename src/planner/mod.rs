pub mod allocation;
pub mod calculations;
pub mod config;
pub mod constants;
pub mod week;

pub use allocation::{CategoryFill, aggregate_violations, allocate, walk_category};
pub use calculations::{
    BmiClass, BodyMetrics, calculate_bmi, calculate_bmr, calculate_body_fat_mass,
    calculate_calorie_intake, calculate_devine_ideal_weight, calculate_ideal_weight,
    calculate_tbw, calculate_tdee, macro_ranges_for,
};
pub use config::{
    AllocationStrategy, CategoryFractions, FractionPreset, MacroMode, PlannerConfig, load_config,
};
pub use constants::*;
pub use week::plan_days;
