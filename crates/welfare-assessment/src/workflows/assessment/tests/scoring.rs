use super::common::*;
use crate::workflows::assessment::{
    AssessmentConfig, AssessmentDimension, AssessmentEngine, CategoryColor, DependentWeights,
    HousingCondition, MaritalStatus, NeedsCategory, SocialStatusWeights,
};
use chrono::Utc;

#[test]
fn financial_score_is_zero_for_non_positive_family_size() {
    let engine = engine();

    assert_eq!(engine.financial_score(&financials(100.0, 0.0, 0)), 0);
    assert_eq!(engine.financial_score(&financials(100.0, 0.0, -2)), 0);
}

#[test]
fn financial_score_bands_are_inclusive_ceilings() {
    let engine = engine();
    let cases = [
        (500.0, 5),
        (501.0, 4),
        (750.0, 4),
        (751.0, 3),
        (1000.0, 3),
        (1500.0, 2),
        (2000.0, 1),
        (2001.0, 0),
    ];

    for (per_capita, expected) in cases {
        let score = engine.financial_score(&financials(per_capita, 0.0, 1));
        assert_eq!(score, expected, "per-capita income {per_capita}");
    }
}

#[test]
fn financial_score_treats_deficit_households_as_highest_need() {
    let engine = engine();

    assert_eq!(engine.financial_score(&financials(1_000.0, 3_000.0, 2)), 5);
}

#[test]
fn financial_score_ignores_configured_thresholds() {
    let mut config = AssessmentConfig::default();
    config.financial_thresholds.very_low = 50.0;
    let engine = AssessmentEngine::new(config);

    assert_eq!(engine.financial_score(&financials(400.0, 0.0, 1)), 5);
}

#[test]
fn financial_score_never_increases_with_per_capita_income() {
    let engine = engine();
    let mut previous = u8::MAX;

    for step in 0..60 {
        let per_capita = step as f64 * 50.0 - 200.0;
        let score = engine.financial_score(&financials(per_capita * 3.0, 0.0, 3));
        assert!(score <= previous, "score rose at per-capita {per_capita}");
        previous = score;
    }
}

#[test]
fn dependents_score_only_counts_dependents() {
    let engine = engine();
    let members = vec![
        member("Tariq", 70, "Father"),
        member("Sana", 10, "Daughter"),
    ];

    assert_eq!(engine.dependents_score(&members), 0);
}

#[test]
fn dependents_relationship_weights_are_exclusive() {
    let engine = AssessmentEngine::new(AssessmentConfig {
        dependent_weights: DependentWeights {
            spouse: 1.0,
            elderly_parent: 10.0,
            child: 10.0,
            disabled_member: 0.0,
            unmarried_daughter: 0.0,
        },
        ..AssessmentConfig::default()
    });

    // Matches the spouse keyword first, so neither parent nor child weight is added.
    let members = vec![dependent("Nadia", 35, "Wife of son")];

    assert_eq!(engine.dependents_score(&members), 1);
}

#[test]
fn dependents_weights_stack_for_disabled_unmarried_daughter() {
    let engine = engine();
    let mut daughter = dependent("Hira", 24, "daughter");
    daughter.has_disability = true;
    daughter.marital_status = MaritalStatus::Divorced;

    // child 1.0 + disabled 2.0 + unmarried daughter 1.0 = 4.0
    assert_eq!(engine.dependents_score(&[daughter]), 3);
}

#[test]
fn married_daughter_gets_no_unmarried_weight() {
    let engine = engine();
    let mut daughter = dependent("Hira", 24, "Daughter");
    daughter.marital_status = MaritalStatus::Married;

    assert_eq!(engine.dependents_score(&[daughter]), 1);
}

#[test]
fn unlisted_marital_status_scores_without_unmarried_weight() {
    let engine = engine();
    let mut daughter = dependent("Hira", 24, "Daughter");
    daughter.marital_status =
        serde_json::from_value(serde_json::json!("engaged")).expect("open status parses");

    assert_eq!(daughter.marital_status, MaritalStatus::Other);
    assert_eq!(daughter.marital_status.label(), "other");
    // child weight only
    assert_eq!(engine.dependents_score(&[daughter]), 1);
}

#[test]
fn dependents_relationship_matching_is_case_insensitive() {
    let engine = engine();
    let members = vec![
        dependent("Ghulam", 74, "FATHER"),
        dependent("Zainab", 69, "Mother"),
        dependent("Ali", 9, "Son"),
    ];

    // 1.5 + 1.5 + 1.0 = 4.0
    assert_eq!(engine.dependents_score(&members), 3);
}

#[test]
fn dependents_score_caps_at_five() {
    let engine = engine();
    let members: Vec<_> = (0..6)
        .map(|index| {
            let mut child = dependent(&format!("Child {index}"), 8, "son");
            child.has_disability = true;
            child
        })
        .collect();

    assert_eq!(engine.dependents_score(&members), 5);
}

#[test]
fn adding_a_disabled_member_never_lowers_scores() {
    let engine = engine();
    let mut members = vec![dependent("Ali", 9, "Son"), earner("Asif", 40, "Head", 900.0)];
    let before_dependents = engine.dependents_score(&members);
    let before_social = engine.social_status_score(&members, HousingCondition::Fair, false);

    let mut disabled = dependent("Bilal", 15, "Son");
    disabled.has_disability = true;
    members.push(disabled);

    assert!(engine.dependents_score(&members) >= before_dependents);
    assert!(engine.social_status_score(&members, HousingCondition::Fair, false) >= before_social);
}

#[test]
fn social_score_counts_each_disabled_member() {
    let engine = AssessmentEngine::new(AssessmentConfig {
        social_status_weights: SocialStatusWeights {
            disabled: 1.0,
            ..SocialStatusWeights::zero()
        },
        ..AssessmentConfig::default()
    });
    let mut members = vec![earner("Asif", 40, "Head", 900.0)];
    for name in ["Sara", "Omar", "Laila", "Yusuf"] {
        let mut relative = member(name, 30, "Cousin");
        relative.has_disability = true;
        members.push(relative);
    }

    assert_eq!(
        engine.social_status_score(&members, HousingCondition::Good, false),
        3
    );
}

#[test]
fn social_score_flags_orphans_once_without_parents() {
    let engine = AssessmentEngine::new(AssessmentConfig {
        social_status_weights: SocialStatusWeights {
            orphan: 2.0,
            ..SocialStatusWeights::zero()
        },
        ..AssessmentConfig::default()
    });
    let orphans = vec![
        member("Ali", 9, "Son"),
        member("Sana", 12, "Daughter"),
        member("Kamran", 55, "Uncle"),
    ];

    assert_eq!(
        engine.social_status_score(&orphans, HousingCondition::Good, false),
        2
    );

    let mut with_mother = orphans.clone();
    with_mother.push(member("Rubina", 33, "Mother"));
    assert_eq!(
        engine.social_status_score(&with_mother, HousingCondition::Good, false),
        0
    );
}

#[test]
fn social_score_ignores_adult_children_for_orphan_status() {
    let engine = AssessmentEngine::new(AssessmentConfig {
        social_status_weights: SocialStatusWeights {
            orphan: 5.0,
            ..SocialStatusWeights::zero()
        },
        ..AssessmentConfig::default()
    });
    let members = vec![member("Faisal", 18, "Son")];

    assert_eq!(
        engine.social_status_score(&members, HousingCondition::Good, false),
        0
    );
}

#[test]
fn social_score_detects_households_without_adult_male_earner() {
    let engine = AssessmentEngine::new(AssessmentConfig {
        social_status_weights: SocialStatusWeights {
            female_headed: 2.0,
            ..SocialStatusWeights::zero()
        },
        ..AssessmentConfig::default()
    });

    let wife_and_daughter = vec![
        earner("Shazia", 40, "Wife", 800.0),
        earner("Mehwish", 21, "Daughter", 400.0),
        earner("Hamza", 16, "Son", 200.0),
    ];
    assert_eq!(
        engine.social_status_score(&wife_and_daughter, HousingCondition::Good, false),
        2
    );

    let with_earning_son = vec![
        earner("Shazia", 40, "Wife", 800.0),
        earner("Hamza", 19, "Son", 200.0),
    ];
    assert_eq!(
        engine.social_status_score(&with_earning_son, HousingCondition::Good, false),
        0
    );
}

#[test]
fn social_score_adds_widow_and_poor_housing() {
    let engine = engine();
    let members = vec![earner("Rashid", 45, "Brother", 500.0)];

    assert_eq!(
        engine.social_status_score(&members, HousingCondition::Good, false),
        0
    );
    // widow 2.0 + very poor housing 1.5 = 3.5
    assert_eq!(
        engine.social_status_score(&members, HousingCondition::VeryPoor, true),
        2
    );
    // widow 2.0 + poor housing 1.5 + disabled 1.5 = 5.0
    let mut with_disability = members.clone();
    with_disability[0].has_disability = true;
    assert_eq!(
        engine.social_status_score(&with_disability, HousingCondition::Poor, true),
        3
    );
}

#[test]
fn officer_score_is_clamped_into_range() {
    let engine = engine();

    assert_eq!(engine.officer_score(&officer(-3.0)), 0);
    assert_eq!(engine.officer_score(&officer(9.0)), 5);
    assert_eq!(engine.officer_score(&officer(4.0)), 4);
    assert_eq!(engine.officer_score(&officer(f64::NAN)), 0);
}

#[test]
fn officer_score_rounds_fractional_ratings() {
    let engine = engine();

    assert_eq!(engine.officer_score(&officer(2.4)), 2);
    assert_eq!(engine.officer_score(&officer(2.5)), 3);
}

#[test]
fn assessment_total_is_exact_sum_of_dimensions() {
    let engine = engine();
    let mut input = spouse_household();
    input.housing_condition = HousingCondition::Poor;
    input.is_widow_headed = true;

    let scores = engine.calculate_assessment(&input);

    assert_eq!(
        scores.total_score,
        scores.financial_score
            + scores.dependents_score
            + scores.social_status_score
            + scores.officer_score
    );
    assert_eq!(scores.components.len(), 4);
    assert_eq!(scores.components[0].dimension, AssessmentDimension::Financial);
    assert_eq!(scores.components[3].dimension, AssessmentDimension::Officer);
}

#[test]
fn assessment_scores_spouse_household_into_category_two() {
    let engine = engine_without_social_weights();

    let scores = engine.calculate_assessment(&spouse_household());

    assert_eq!(scores.per_capita_income, 750.0);
    assert_eq!(scores.financial_score, 4);
    assert_eq!(scores.dependents_score, 1);
    assert_eq!(scores.social_status_score, 0);
    assert_eq!(scores.officer_score, 4);
    assert_eq!(scores.total_score, 9);
    assert_eq!(scores.category, NeedsCategory::Category2);
    assert_eq!(scores.category_color, CategoryColor::Yellow);
}

#[test]
fn assessment_reports_zero_per_capita_for_empty_household() {
    let engine = engine();
    let mut input = minimal_input();
    input.financials.family_size = 0;

    let scores = engine.calculate_assessment(&input);

    assert_eq!(scores.per_capita_income, 0.0);
    assert_eq!(scores.financial_score, 0);
}

#[test]
fn assessment_keeps_negative_per_capita_income() {
    let engine = engine();
    let mut input = minimal_input();
    input.financials.total_expenses = 14_000.0;

    let scores = engine.calculate_assessment(&input);

    assert_eq!(scores.per_capita_income, -1_000.0);
    assert_eq!(scores.financial_score, 5);
}

#[test]
fn assessment_is_idempotent_apart_from_timestamp() {
    let engine = engine();
    let input = spouse_household();

    let first = engine.calculate_assessment(&input);
    let second = engine.calculate_assessment(&input);

    assert_eq!(first.tally(), second.tally());
    assert_eq!(first.components, second.components);
    assert_eq!(first.per_capita_income, second.per_capita_income);
}

#[test]
fn assessment_timestamp_is_not_before_invocation() {
    let engine = engine();
    let invoked = Utc::now();

    let scores = engine.calculate_assessment(&minimal_input());

    assert!(scores.calculated_at >= invoked);
}
