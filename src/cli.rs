use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::models::{ActivityLevel, Gender, Goal, PatientProfile};
use crate::planner::{AllocationStrategy, FractionPreset, MacroMode};

/// Meal planner: calorie calculator and randomized daily/weekly meal plan generator.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog CSV file.
    #[arg(short, long, global = true, default_value = "data/food.csv")]
    pub catalog: PathBuf,

    /// Path to a JSON planner configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for patient data, show metrics, and generate meal plans.
    Interactive,

    /// Compute body metrics and the recommended daily calorie intake.
    Metrics {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate meal plans from a profile or an explicit calorie intake.
    Plan(PlanArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

/// Anthropometric inputs and goals.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Body weight in kg.
    #[arg(long)]
    pub weight: f64,

    /// Height in cm.
    #[arg(long)]
    pub height: f64,

    /// Age in years.
    #[arg(long)]
    pub age: u32,

    #[arg(long, value_enum)]
    pub gender: Gender,

    /// Body fat percentage.
    #[arg(long, default_value = "20")]
    pub body_fat: f64,

    #[arg(long, value_enum, default_value = "sedentary")]
    pub activity: ActivityLevel,

    /// Dietary goal; may be repeated.
    #[arg(long = "goal", value_enum)]
    pub goals: Vec<Goal>,
}

impl ProfileArgs {
    pub fn to_profile(&self) -> PatientProfile {
        PatientProfile {
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
            gender: self.gender,
            body_fat_percent: self.body_fat,
            activity: self.activity,
        }
    }
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Daily calorie intake; skips the profile calculation.
    #[arg(long, conflicts_with_all = ["weight", "height", "age", "gender"])]
    pub calories: Option<f64>,

    #[arg(long, requires_all = ["height", "age", "gender"])]
    pub weight: Option<f64>,

    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    #[arg(long, default_value = "20")]
    pub body_fat: f64,

    #[arg(long, value_enum, default_value = "sedentary")]
    pub activity: ActivityLevel,

    /// Dietary goal; may be repeated. Also selects the macro ranges.
    #[arg(long = "goal", value_enum)]
    pub goals: Vec<Goal>,

    /// Number of days to plan.
    #[arg(long, default_value = "1")]
    pub days: usize,

    /// Plan a full week (overrides --days).
    #[arg(long)]
    pub week: bool,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub strategy: Option<AllocationStrategy>,

    #[arg(long, value_enum)]
    pub macro_mode: Option<MacroMode>,

    /// Named category split (overrides the config file's fractions).
    #[arg(long, value_enum)]
    pub fractions: Option<FractionPreset>,

    /// Ignore goal macro ranges entirely.
    #[arg(long)]
    pub no_macros: bool,

    /// Print plans as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    /// Profile built from the optional flags, if all required ones are present.
    pub fn profile(&self) -> Option<PatientProfile> {
        Some(PatientProfile {
            weight_kg: self.weight?,
            height_cm: self.height?,
            age: self.age?,
            gender: self.gender?,
            body_fat_percent: self.body_fat,
            activity: self.activity,
        })
    }
}
