use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_planner_rs::catalog::load_catalog;
use meal_planner_rs::cli::{Cli, Command, PlanArgs, ProfileArgs};
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{
    PlanAction, display_days, display_meal_plan, display_metrics, print_json, prompt_goals,
    prompt_plan_action, prompt_profile, prompt_yes_no,
};
use meal_planner_rs::logging;
use meal_planner_rs::models::MacroRanges;
use meal_planner_rs::planner::{
    BodyMetrics, CategoryFractions, PlannerConfig, WEEK_DAYS, allocate, load_config,
    macro_ranges_for, plan_days,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&cli.catalog, &config),
        Command::Metrics { profile, json } => cmd_metrics(&profile, json),
        Command::Plan(args) => cmd_plan(&cli.catalog, config, &args),
    }
}

/// Seeded when a seed is given, otherwise fresh entropy per run.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Compute and display body metrics.
fn cmd_metrics(args: &ProfileArgs, json: bool) -> Result<()> {
    let profile = args.to_profile();
    profile.validate().map_err(PlannerError::InvalidInput)?;

    let metrics = BodyMetrics::compute(&profile, &args.goals);
    if json {
        return print_json(&metrics);
    }

    display_metrics(&metrics);
    Ok(())
}

/// Generate one or more day plans non-interactively.
fn cmd_plan(catalog_path: &Path, mut config: PlannerConfig, args: &PlanArgs) -> Result<()> {
    let intake = match (args.calories, args.profile()) {
        (Some(calories), _) => calories,
        (None, Some(profile)) => {
            profile.validate().map_err(PlannerError::InvalidInput)?;
            BodyMetrics::compute(&profile, &args.goals)
                .calorie_intake
                .ok_or_else(|| {
                    PlannerError::InvalidInput(
                        "calorie intake needs gender male or female".to_string(),
                    )
                })?
        }
        (None, None) => {
            return Err(PlannerError::InvalidInput(
                "provide --calories or --weight/--height/--age/--gender".to_string(),
            ));
        }
    };

    if let Some(strategy) = args.strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(mode) = args.macro_mode {
        config = config.with_macro_mode(mode);
    }
    if let Some(preset) = args.fractions {
        config.fractions = CategoryFractions::from_preset(preset);
    }

    let days = if args.week { WEEK_DAYS } else { args.days };
    if days == 0 {
        return Err(PlannerError::InvalidInput(
            "--days must be at least 1".to_string(),
        ));
    }

    let ranges: Option<MacroRanges> = if args.no_macros {
        None
    } else {
        macro_ranges_for(&args.goals)
    };

    let catalog = load_catalog(catalog_path)?;
    let mut rng = make_rng(args.seed);
    let plans = plan_days(intake, &catalog, ranges.as_ref(), &config, days, &mut rng);

    if args.json {
        return match plans.as_slice() {
            [single] => print_json(single),
            many => print_json(many),
        };
    }

    println!("Planning for {:.0} kcal/day", intake);
    match plans.as_slice() {
        [single] => display_meal_plan(single, "Meal Plan"),
        many => display_days(many),
    }
    Ok(())
}

/// Prompt for patient data, then generate and regenerate plans on request.
fn cmd_interactive(catalog_path: &Path, config: &PlannerConfig) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!("Loaded {} meals", catalog.len());
    println!();

    let profile = prompt_profile()?;
    let goals = prompt_goals()?;

    let metrics = BodyMetrics::compute(&profile, &goals);
    display_metrics(&metrics);

    let Some(intake) = metrics.calorie_intake else {
        println!("Cannot plan meals without a calorie intake (gender not specified).");
        return Ok(());
    };

    let ranges = match macro_ranges_for(&goals) {
        Some(r) if prompt_yes_no("Apply the macro ranges for your goal?", true)? => Some(r),
        _ => None,
    };

    let mut rng = StdRng::from_entropy();
    let mut plan = allocate(intake, &catalog, ranges.as_ref(), config, &mut rng);
    display_meal_plan(&plan, "Meal Plan");

    loop {
        match prompt_plan_action()? {
            PlanAction::RegenerateDay => {
                plan = allocate(intake, &catalog, ranges.as_ref(), config, &mut rng);
                display_meal_plan(&plan, "Meal Plan");
            }
            PlanAction::GenerateWeek => {
                let week = plan_days(
                    intake,
                    &catalog,
                    ranges.as_ref(),
                    config,
                    WEEK_DAYS,
                    &mut rng,
                );
                display_days(&week);
            }
            PlanAction::Quit => break,
        }
    }

    Ok(())
}
