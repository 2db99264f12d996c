pub mod prompts;
pub mod render;

pub use prompts::{
    PlanAction, prompt_activity, prompt_gender, prompt_goals, prompt_plan_action, prompt_profile,
    prompt_yes_no,
};
pub use render::{display_days, display_meal_plan, display_metrics, display_violations, print_json};
