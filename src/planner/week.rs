use rand::Rng;
use tracing::debug;

use crate::models::{MacroRanges, MealPlan, MealRecord};
use crate::planner::allocation::allocate;
use crate::planner::config::PlannerConfig;

/// Generate plans for `days` consecutive days.
///
/// Each day is an independent allocation with its own shuffle drawn from the
/// shared `rng`; nothing carries over between days.
pub fn plan_days<R: Rng + ?Sized>(
    calorie_intake: f64,
    catalog: &[MealRecord],
    macro_ranges: Option<&MacroRanges>,
    config: &PlannerConfig,
    days: usize,
    rng: &mut R,
) -> Vec<MealPlan> {
    let mut plans = Vec::with_capacity(days);
    for day in 0..days {
        debug!(day = day + 1, "planning day");
        plans.push(allocate(calorie_intake, catalog, macro_ranges, config, rng));
    }
    plans
}
