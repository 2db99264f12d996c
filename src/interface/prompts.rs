use std::str::FromStr;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Goal, PatientProfile};

/// What to do after a plan has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    RegenerateDay,
    GenerateWeek,
    Quit,
}

fn prompt_number<T: FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))
}

pub fn prompt_gender() -> Result<Gender> {
    let options = ["Male", "Female", "Other"];
    let selection = Select::new()
        .with_prompt("Select your gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Gender::Male,
        1 => Gender::Female,
        _ => Gender::Other,
    })
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL.iter().map(|a| a.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Select your activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection.min(ActivityLevel::ALL.len() - 1)])
}

/// Prompt for anthropometric inputs.
pub fn prompt_profile() -> Result<PatientProfile> {
    let age: u32 = prompt_number("Enter patient age", "30")?;
    if !(1..=150).contains(&age) {
        return Err(PlannerError::InvalidInput(
            "Age must be between 1 and 150".to_string(),
        ));
    }

    let gender = prompt_gender()?;
    let weight_kg: f64 = prompt_number("Enter your weight (kg)", "70")?;
    let height_cm: f64 = prompt_number("Enter your height (cm)", "170")?;
    let body_fat_percent: f64 = prompt_number("Enter your body fat percentage (%)", "20")?;
    let activity = prompt_activity()?;

    let profile = PatientProfile {
        weight_kg,
        height_cm,
        age,
        gender,
        body_fat_percent,
        activity,
    };
    profile.validate().map_err(PlannerError::InvalidInput)?;
    Ok(profile)
}

/// Prompt for dietary goals (any number, including none).
pub fn prompt_goals() -> Result<Vec<Goal>> {
    let options: Vec<String> = Goal::ALL.iter().map(|g| g.to_string()).collect();
    let selections = MultiSelect::new()
        .with_prompt("Select your dietary goals (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    Ok(selections
        .into_iter()
        .filter_map(|i| Goal::ALL.get(i).copied())
        .collect())
}

pub fn prompt_plan_action() -> Result<PlanAction> {
    let options = ["Regenerate meals", "Generate meals for a week", "Quit"];
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => PlanAction::RegenerateDay,
        1 => PlanAction::GenerateWeek,
        _ => PlanAction::Quit,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
