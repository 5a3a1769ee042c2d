use crate::workflows::assessment::{
    AssessmentConfig, AssessmentEngine, AssessmentInput, FamilyMember, HouseholdFinancials,
    HousingCondition, MaritalStatus, OfficerReport, SocialStatusWeights,
};

pub(super) fn member(name: &str, age: i32, relationship: &str) -> FamilyMember {
    FamilyMember {
        name: name.to_string(),
        age,
        relationship: relationship.to_string(),
        marital_status: MaritalStatus::Single,
        monthly_income: 0.0,
        has_disability: false,
        is_dependent: false,
    }
}

pub(super) fn dependent(name: &str, age: i32, relationship: &str) -> FamilyMember {
    FamilyMember {
        is_dependent: true,
        ..member(name, age, relationship)
    }
}

pub(super) fn earner(name: &str, age: i32, relationship: &str, income: f64) -> FamilyMember {
    FamilyMember {
        monthly_income: income,
        marital_status: MaritalStatus::Married,
        ..member(name, age, relationship)
    }
}

pub(super) fn financials(income: f64, expenses: f64, family_size: i32) -> HouseholdFinancials {
    HouseholdFinancials {
        total_income: income,
        total_expenses: expenses,
        family_size,
    }
}

pub(super) fn officer(score: f64) -> OfficerReport {
    OfficerReport {
        officer_score: score,
        remarks: None,
    }
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::default()
}

pub(super) fn engine_without_social_weights() -> AssessmentEngine {
    AssessmentEngine::new(AssessmentConfig {
        social_status_weights: SocialStatusWeights::zero(),
        ..AssessmentConfig::default()
    })
}

/// Minimal valid household: 10000 income, 2000 expenses, four members, one listed.
pub(super) fn minimal_input() -> AssessmentInput {
    AssessmentInput {
        financials: financials(10_000.0, 2_000.0, 4),
        family_members: vec![earner("Imran Qureshi", 42, "Head", 10_000.0)],
        housing_condition: HousingCondition::Good,
        officer_report: officer(3.0),
        is_widow_headed: false,
    }
}

/// 4000 income, 1000 expenses, four members; a dependent spouse; officer rated 4.
pub(super) fn spouse_household() -> AssessmentInput {
    let mut spouse = dependent("Ayesha Bibi", 38, "Spouse");
    spouse.marital_status = MaritalStatus::Married;

    AssessmentInput {
        financials: financials(4_000.0, 1_000.0, 4),
        family_members: vec![spouse],
        housing_condition: HousingCondition::Fair,
        officer_report: officer(4.0),
        is_widow_headed: false,
    }
}
