#[macro_use]
extern crate assert_float_eq;

use meal_planner_rs::models::{ActivityLevel, Gender, Goal, PatientProfile};
use meal_planner_rs::planner::{
    BmiClass, BodyMetrics, calculate_bmi, calculate_bmr, calculate_body_fat_mass,
    calculate_calorie_intake, calculate_devine_ideal_weight, calculate_ideal_weight,
    calculate_tbw, calculate_tdee, macro_ranges_for,
};

fn make_profile(gender: Gender) -> PatientProfile {
    PatientProfile {
        weight_kg: 80.0,
        height_cm: 180.0,
        age: 30,
        gender,
        body_fat_percent: 25.0,
        activity: ActivityLevel::ModeratelyActive,
    }
}

#[test]
fn test_bmi() {
    assert_float_absolute_eq!(calculate_bmi(80.0, 200.0), 20.0, 1e-9);
    assert_float_absolute_eq!(calculate_bmi(81.0, 180.0), 25.0, 1e-9);
}

#[test]
fn test_bmr_mifflin_st_jeor() {
    // 800 + 1125 - 150 + 5
    assert_float_absolute_eq!(calculate_bmr(80.0, 180.0, 30, Gender::Male).unwrap(), 1780.0, 1e-9);
    // 600 + 1031.25 - 125 - 161
    assert_float_absolute_eq!(
        calculate_bmr(60.0, 165.0, 25, Gender::Female).unwrap(),
        1345.25,
        1e-9
    );
}

#[test]
fn test_tdee_activity_factors() {
    assert_float_absolute_eq!(calculate_tdee(1000.0, ActivityLevel::Sedentary), 1200.0, 1e-9);
    assert_float_absolute_eq!(calculate_tdee(1000.0, ActivityLevel::LightlyActive), 1375.0, 1e-9);
    assert_float_absolute_eq!(calculate_tdee(1000.0, ActivityLevel::ExtraActive), 1900.0, 1e-9);
}

#[test]
fn test_ideal_weights() {
    let male = calculate_ideal_weight(152.4, Gender::Male).unwrap();
    assert_float_absolute_eq!(male, 50.0, 1e-9);

    let female = calculate_ideal_weight(162.4, Gender::Female).unwrap();
    assert_float_absolute_eq!(female, 45.5 + 9.1, 1e-9);

    // 60 inches is 152.4 cm
    let devine = calculate_devine_ideal_weight(152.4, Gender::Male).unwrap();
    assert_float_absolute_eq!(devine, 50.0, 0.01);
}

#[test]
fn test_tbw_and_fat_mass() {
    let k = -2.097 + 0.1069 * 165.0 + 0.2466 * 60.0;
    let expected = 0.3669 * k - 0.0906 * 60.0 + 0.1074 * 165.0 + 0.2466 * 60.0;
    assert_float_absolute_eq!(
        calculate_tbw(60.0, 165.0, 25, Gender::Female).unwrap(),
        expected,
        1e-9
    );

    assert_float_absolute_eq!(calculate_body_fat_mass(80.0, 25.0), 20.0, 1e-9);
}

#[test]
fn test_calorie_intake_goals() {
    assert_float_absolute_eq!(calculate_calorie_intake(2000.0, &[], 80.0, Some(70.0)), 2000.0, 1e-9);
    assert_float_absolute_eq!(
        calculate_calorie_intake(2000.0, &[Goal::WeightLoss], 80.0, Some(70.0)),
        1500.0,
        1e-9
    );
    assert_float_absolute_eq!(
        calculate_calorie_intake(2000.0, &[Goal::WeightGain], 80.0, Some(70.0)),
        2500.0,
        1e-9
    );
    assert_float_absolute_eq!(
        calculate_calorie_intake(2000.0, &[Goal::Maintenance], 80.0, Some(70.0)),
        2000.0,
        1e-9
    );
    // Loss wins when both directions are selected
    assert_float_absolute_eq!(
        calculate_calorie_intake(2000.0, &[Goal::WeightGain, Goal::WeightLoss], 80.0, None),
        1500.0,
        1e-9
    );
}

#[test]
fn test_body_metrics_compute() {
    let metrics = BodyMetrics::compute(&make_profile(Gender::Male), &[Goal::WeightLoss]);

    assert_eq!(metrics.bmi_class, BmiClass::Normal);
    assert_float_absolute_eq!(metrics.body_fat_mass_kg, 20.0, 1e-9);
    assert_float_absolute_eq!(metrics.bmr.unwrap(), 1780.0, 1e-9);
    assert_float_absolute_eq!(metrics.tdee.unwrap(), 1780.0 * 1.55, 1e-9);
    assert_float_absolute_eq!(metrics.calorie_intake.unwrap(), 1780.0 * 1.55 - 500.0, 1e-9);
}

#[test]
fn test_body_metrics_other_gender() {
    let metrics = BodyMetrics::compute(&make_profile(Gender::Other), &[Goal::WeightGain]);

    assert!(metrics.bmr.is_none());
    assert!(metrics.tdee.is_none());
    assert!(metrics.calorie_intake.is_none());
    assert!(metrics.ideal_weight_kg.is_none());
    // BMI does not depend on gender
    assert!(metrics.bmi > 0.0);
}

#[test]
fn test_goal_macro_ranges() {
    let loss = macro_ranges_for(&[Goal::WeightLoss]).unwrap();
    assert_eq!(loss.protein.unwrap().max, 56.0);
    assert_eq!(loss.carb.unwrap().max, 150.0);
    assert_eq!(loss.fat.unwrap().max, 35.0);

    let rapid = macro_ranges_for(&[Goal::RapidWeightLoss, Goal::WeightGain]).unwrap();
    assert_eq!(rapid.carb.unwrap().max, 100.0);
}
