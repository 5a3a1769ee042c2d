use serde::{Deserialize, Serialize};

use super::domain::AssessmentInput;

const MAX_MEMBER_AGE: i32 = 120;
const MAX_OFFICER_SCORE: f64 = 5.0;

/// Pre-flight problems found in survey data. Validation is strict where scoring is
/// lenient: an officer score of 7 is rejected here but clamped to 5 when scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Total income cannot be negative")]
    NegativeIncome,
    #[error("Total expenses cannot be negative")]
    NegativeExpenses,
    #[error("Family size must be greater than zero")]
    NonPositiveFamilySize,
    #[error("At least one family member is required")]
    NoFamilyMembers,
    #[error("Officer score must be between 0 and 5")]
    OfficerScoreOutOfRange,
    #[error("Family member {position}: name is required")]
    MissingMemberName { position: usize },
    #[error("Family member {position}: age must be between 0 and 120")]
    MemberAgeOutOfRange { position: usize },
    #[error("Family member {position}: monthly income cannot be negative")]
    NegativeMemberIncome { position: usize },
}

/// Outcome of [`validate_assessment_data`]; the caller decides whether to block submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        Self {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn collect_issues(input: &AssessmentInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let financials = &input.financials;

    // Negated comparisons so NaN is rejected as well.
    if !(financials.total_income >= 0.0) {
        issues.push(ValidationIssue::NegativeIncome);
    }
    if !(financials.total_expenses >= 0.0) {
        issues.push(ValidationIssue::NegativeExpenses);
    }
    if financials.family_size <= 0 {
        issues.push(ValidationIssue::NonPositiveFamilySize);
    }
    if input.family_members.is_empty() {
        issues.push(ValidationIssue::NoFamilyMembers);
    }

    let officer_score = input.officer_report.officer_score;
    if !(0.0..=MAX_OFFICER_SCORE).contains(&officer_score) {
        issues.push(ValidationIssue::OfficerScoreOutOfRange);
    }

    for (index, member) in input.family_members.iter().enumerate() {
        let position = index + 1;
        if member.name.trim().is_empty() {
            issues.push(ValidationIssue::MissingMemberName { position });
        }
        if !(0..=MAX_MEMBER_AGE).contains(&member.age) {
            issues.push(ValidationIssue::MemberAgeOutOfRange { position });
        }
        if !(member.monthly_income >= 0.0) {
            issues.push(ValidationIssue::NegativeMemberIncome { position });
        }
    }

    issues
}

pub fn validate_assessment_data(input: &AssessmentInput) -> ValidationReport {
    ValidationReport::from_issues(&collect_issues(input))
}
