use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::models::{
    CategoryBudget, Macro, MacroRanges, MacroViolation, MealCategory, MealPlan, MealRecord,
    NutrientTotals,
};
use crate::planner::config::{AllocationStrategy, PlannerConfig};

/// Result of a single first-fit walk over one category.
#[derive(Debug)]
pub struct CategoryFill<'a> {
    pub selected: Vec<&'a MealRecord>,
    pub remaining: f64,
}

/// Walk candidates once, in the given order, accepting each meal that fits.
///
/// A meal is accepted iff its calories are at most the remaining allowance,
/// which is then reduced. Rejected meals are never reconsidered.
pub fn walk_category<'a>(candidates: &[&'a MealRecord], allowance: f64) -> CategoryFill<'a> {
    let mut remaining = allowance;
    let mut selected = Vec::new();

    for meal in candidates {
        if meal.calories <= remaining {
            remaining -= meal.calories;
            selected.push(*meal);
        }
    }

    CategoryFill {
        selected,
        remaining,
    }
}

/// Build a one-day meal plan.
///
/// Meals with unrecognized categories are ignored. When `macro_ranges` is
/// given, the config's macro mode decides whether candidates are pre-filtered,
/// plan totals are checked, or both. The result depends only on the inputs and
/// the state of `rng`.
pub fn allocate<R: Rng + ?Sized>(
    calorie_intake: f64,
    catalog: &[MealRecord],
    macro_ranges: Option<&MacroRanges>,
    config: &PlannerConfig,
    rng: &mut R,
) -> MealPlan {
    let budget = config.fractions.budget(calorie_intake);
    let ranges = macro_ranges.filter(|r| !r.is_empty());

    let filter = ranges.filter(|_| config.macro_mode.filters_meals());
    let candidates = eligible_meals(catalog, filter);

    let meals = match config.strategy {
        AllocationStrategy::PerCategory => allocate_per_category(&candidates, &budget, rng),
        AllocationStrategy::CrossCategory => allocate_cross_category(&candidates, &budget, rng),
    };

    let check = ranges.filter(|_| config.macro_mode.checks_totals());
    let plan = finish_plan(meals, budget, check);

    info!(
        strategy = ?config.strategy,
        meals = plan.len(),
        total_calories = plan.total_calories,
        violations = plan.violations.len(),
        "allocated meal plan"
    );
    plan
}

/// Catalog rows that may enter a plan, paired with their resolved category.
fn eligible_meals<'a>(
    catalog: &'a [MealRecord],
    filter: Option<&MacroRanges>,
) -> Vec<(MealCategory, &'a MealRecord)> {
    let mut unrecognized = 0usize;
    let mut filtered = 0usize;

    let eligible: Vec<(MealCategory, &MealRecord)> = catalog
        .iter()
        .filter_map(|meal| {
            let Some(category) = meal.meal_category() else {
                unrecognized += 1;
                return None;
            };
            if let Some(ranges) = filter {
                if !ranges.admits(meal) {
                    filtered += 1;
                    return None;
                }
            }
            Some((category, meal))
        })
        .collect();

    debug!(
        eligible = eligible.len(),
        unrecognized, filtered, "filtered catalog candidates"
    );
    eligible
}

/// Variant A: shuffle and walk each category on its own.
fn allocate_per_category<R: Rng + ?Sized>(
    candidates: &[(MealCategory, &MealRecord)],
    budget: &CategoryBudget,
    rng: &mut R,
) -> BTreeMap<MealCategory, Vec<MealRecord>> {
    let mut meals = BTreeMap::new();

    for category in MealCategory::ALL {
        let mut rows: Vec<&MealRecord> = candidates
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, m)| *m)
            .collect();
        rows.shuffle(rng);

        let allowance = budget.allowance(category);
        let fill = walk_category(&rows, allowance);
        debug!(
            %category,
            allowance,
            candidates = rows.len(),
            selected = fill.selected.len(),
            remaining = fill.remaining,
            "filled category"
        );

        meals.insert(category, fill.selected.into_iter().cloned().collect());
    }

    meals
}

/// Variant B: shuffle the whole catalog once; each meal only competes for its own category.
fn allocate_cross_category<R: Rng + ?Sized>(
    candidates: &[(MealCategory, &MealRecord)],
    budget: &CategoryBudget,
    rng: &mut R,
) -> BTreeMap<MealCategory, Vec<MealRecord>> {
    let mut remaining: BTreeMap<MealCategory, f64> = budget.iter().collect();
    let mut meals: BTreeMap<MealCategory, Vec<MealRecord>> = MealCategory::ALL
        .into_iter()
        .map(|c| (c, Vec::new()))
        .collect();

    let mut order = candidates.to_vec();
    order.shuffle(rng);

    for (category, meal) in order {
        let Some(left) = remaining.get_mut(&category) else {
            continue;
        };
        if meal.calories <= *left {
            *left -= meal.calories;
            meals.entry(category).or_default().push(meal.clone());
        }
    }

    for (category, left) in &remaining {
        debug!(%category, remaining = *left, "filled category");
    }

    meals
}

fn finish_plan(
    meals: BTreeMap<MealCategory, Vec<MealRecord>>,
    budget: CategoryBudget,
    check: Option<&MacroRanges>,
) -> MealPlan {
    let mut total_calories = 0.0;
    let mut total_nutrients = NutrientTotals::default();
    for meal in meals.values().flatten() {
        total_calories += meal.calories;
        total_nutrients.add(meal);
    }

    let violations = check
        .map(|ranges| aggregate_violations(&total_nutrients, ranges))
        .unwrap_or_default();

    MealPlan {
        meals,
        budget,
        total_calories,
        total_nutrients,
        violations,
    }
}

/// Totals that fall outside their supplied range. Totals are never adjusted.
pub fn aggregate_violations(totals: &NutrientTotals, ranges: &MacroRanges) -> Vec<MacroViolation> {
    Macro::ALL
        .into_iter()
        .filter_map(|nutrient| {
            let range = ranges.get(nutrient)?;
            let total = totals.get(nutrient);
            (!range.contains(total)).then_some(MacroViolation {
                nutrient,
                total,
                range,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroRange;

    fn meal(name: &str, calories: f64) -> MealRecord {
        MealRecord {
            name: name.to_string(),
            category: "Breakfast".to_string(),
            calories,
            ingredients: String::new(),
            weight_g: 100.0,
            protein_g: 5.0,
            carb_g: 10.0,
            fat_g: 2.0,
            meal_type: String::new(),
        }
    }

    #[test]
    fn test_walk_is_first_fit_and_order_dependent() {
        let big = meal("Big", 200.0);
        let small = meal("Small", 50.0);

        // 200 fills the allowance exactly; 50 no longer fits
        let fill = walk_category(&[&big, &small], 200.0);
        let names: Vec<&str> = fill.selected.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Big"]);
        assert_eq!(fill.remaining, 0.0);

        // 50 first leaves 150, so 200 is skipped and never retried
        let fill = walk_category(&[&small, &big], 200.0);
        let names: Vec<&str> = fill.selected.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Small"]);
        assert_eq!(fill.remaining, 150.0);
    }

    #[test]
    fn test_walk_skips_without_stopping() {
        let a = meal("A", 100.0);
        let b = meal("B", 500.0);
        let c = meal("C", 80.0);

        let fill = walk_category(&[&a, &b, &c], 200.0);
        let names: Vec<&str> = fill.selected.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_walk_zero_calorie_meals_visited_once() {
        let water = meal("Water", 0.0);
        let fill = walk_category(&[&water, &water], 0.0);
        assert_eq!(fill.selected.len(), 2);
        assert_eq!(fill.remaining, 0.0);

        // Negative allowance admits nothing, not even zero-calorie meals
        let fill = walk_category(&[&water], -10.0);
        assert!(fill.selected.is_empty());
    }

    #[test]
    fn test_aggregate_violations() {
        let totals = NutrientTotals {
            protein: 80.0,
            carb: 100.0,
            fat: 10.0,
        };
        let ranges = MacroRanges {
            protein: Some(MacroRange::new(0.0, 56.0)),
            carb: Some(MacroRange::new(120.0, 150.0)),
            fat: None,
        };

        let violations = aggregate_violations(&totals, &ranges);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].nutrient, Macro::Protein);
        assert!(violations[0].is_above());
        assert_eq!(violations[1].nutrient, Macro::Carb);
        assert!(!violations[1].is_above());
    }
}
