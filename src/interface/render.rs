use serde::Serialize;

use crate::error::Result;
use crate::models::{MealCategory, MealPlan};
use crate::planner::BodyMetrics;

fn optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.2} {}", v, unit),
        None => "n/a (gender not specified)".to_string(),
    }
}

/// Display the calculated body metrics.
pub fn display_metrics(metrics: &BodyMetrics) {
    println!();
    println!("=== Calculated Metrics ===");
    println!();
    println!("BMI:              {:.2} ({})", metrics.bmi, metrics.bmi_class);
    println!("BMR:              {}", optional(metrics.bmr, "kcal/day"));
    println!("TDEE:             {}", optional(metrics.tdee, "kcal/day"));
    println!("Body fat mass:    {:.2} kg", metrics.body_fat_mass_kg);
    println!("Total body water: {}", optional(metrics.tbw_liters, "liters"));
    println!(
        "Ideal weight:     {}",
        optional(metrics.ideal_weight_kg, "kg")
    );
    println!(
        "Ideal body weight (Devine): {}",
        optional(metrics.devine_ideal_weight_kg, "kg")
    );
    println!();
    match metrics.calorie_intake {
        Some(intake) => println!(
            "Recommended daily calorie intake: {:.2} kcal/day",
            intake
        ),
        None => println!("Recommended daily calorie intake: unavailable"),
    }
    println!();
}

fn display_category(plan: &MealPlan, category: MealCategory) {
    let meals = plan.meals_for(category);
    println!(
        "--- {} ({}) {:.0} / {:.0} kcal ---",
        category,
        category.arabic_label(),
        plan.category_calories(category),
        plan.budget.allowance(category)
    );

    if meals.is_empty() {
        println!("  (no meal fits this allowance)");
        return;
    }

    for meal in meals {
        println!("  {} - {:.0} kcal [{}]", meal.name, meal.calories, meal.meal_type);
        println!(
            "      {:.0} g | P:{:.1} g C:{:.1} g F:{:.1} g",
            meal.weight_g, meal.protein_g, meal.carb_g, meal.fat_g
        );
        if !meal.ingredients.is_empty() {
            println!("      {}", meal.ingredients);
        }
    }
}

/// Display one day's plan, its totals and any macro warnings.
pub fn display_meal_plan(plan: &MealPlan, title: &str) {
    println!();
    println!("=== {} ===", title);
    println!();

    for category in plan.meals.keys() {
        display_category(plan, *category);
    }

    println!();
    println!("Total calories of day meals: {:.0} kcal", plan.total_calories);
    println!(
        "Total nutrients: protein {:.1} g, carbohydrates {:.1} g, fat {:.1} g",
        plan.total_nutrients.protein, plan.total_nutrients.carb, plan.total_nutrients.fat
    );
    display_violations(plan);
    println!();
}

/// Print a warning line per macro total outside its range.
pub fn display_violations(plan: &MealPlan) {
    for v in &plan.violations {
        let direction = if v.is_above() { "above" } else { "below" };
        println!(
            "Warning: total {} {:.1} g is {} the recommended range {}",
            v.nutrient, v.total, direction, v.range
        );
    }
}

/// Display consecutive day plans.
pub fn display_days(plans: &[MealPlan]) {
    for (i, plan) in plans.iter().enumerate() {
        display_meal_plan(plan, &format!("Day {}", i + 1));
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
