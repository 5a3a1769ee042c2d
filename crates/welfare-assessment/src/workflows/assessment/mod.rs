//! Beneficiary needs assessment.
//!
//! Households are scored on four dimensions (financial need, dependents burden, social
//! vulnerability and the field officer's judgment), each worth 0 to 5 points. The total
//! maps to one of three needs categories, which in turn decides the welfare facilities a
//! household may draw on. Scoring is pure: no I/O, and degenerate input (an empty household,
//! an out-of-range officer rating) scores low instead of failing. Strict checks live in
//! [`validate_assessment_data`] and are never a precondition for scoring.

pub mod domain;
mod engine;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentDimension, AssessmentInput, AssessmentScores, CategoryColor, FamilyMember,
    HouseholdFinancials, HousingCondition, MaritalStatus, NeedsCategory, OfficerReport,
    ScoreComponent,
};
pub use engine::{
    eligible_facilities, AssessmentConfig, AssessmentConfigPatch, AssessmentEngine,
    ConfigValidationError, DependentWeights, FinancialThresholds, ScoreRange, ScoringRanges,
    SocialStatusWeights, MAX_TOTAL_SCORE,
};
pub use validation::{validate_assessment_data, ValidationIssue, ValidationReport};
