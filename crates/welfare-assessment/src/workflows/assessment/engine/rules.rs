use super::super::domain::{
    AssessmentDimension, FamilyMember, HouseholdFinancials, HousingCondition, OfficerReport,
    ScoreComponent,
};
use super::config::{DependentWeights, SocialStatusWeights};

/// Highest score any single dimension can award.
pub(crate) const MAX_DIMENSION_SCORE: u8 = 5;

const SPOUSE_KEYWORDS: &[&str] = &["spouse", "wife"];
const PARENT_KEYWORDS: &[&str] = &["father", "mother"];
const CHILD_KEYWORDS: &[&str] = &["son", "daughter"];
const DAUGHTER_KEYWORDS: &[&str] = &["daughter"];
const NON_EARNER_KEYWORDS: &[&str] = &["wife", "daughter"];

const ADULT_AGE: i32 = 18;

/// Per-capita income ceilings, checked in ascending order. These are fixed and do not
/// follow `FinancialThresholds`.
const PER_CAPITA_BANDS: [(f64, u8); 5] = [
    (500.0, 5),
    (750.0, 4),
    (1000.0, 3),
    (1500.0, 2),
    (2000.0, 1),
];

/// Minimum accumulated weight for each score, checked from the top.
const WEIGHT_BANDS: [(f64, u8); 5] = [(8.0, 5), (6.0, 4), (4.0, 3), (2.0, 2), (1.0, 1)];

pub(crate) fn per_capita_band(per_capita_income: f64) -> u8 {
    PER_CAPITA_BANDS
        .iter()
        .find(|(ceiling, _)| per_capita_income <= *ceiling)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

pub(crate) fn weight_band(weight: f64) -> u8 {
    WEIGHT_BANDS
        .iter()
        .find(|(floor, _)| weight >= *floor)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

pub(crate) fn score_financial(financials: &HouseholdFinancials) -> ScoreComponent {
    if financials.family_size <= 0 {
        return ScoreComponent {
            dimension: AssessmentDimension::Financial,
            basis: 0.0,
            score: 0,
            notes: format!(
                "family size {} leaves per-capita income undefined",
                financials.family_size
            ),
        };
    }

    let per_capita = financials.per_capita_income();
    let score = per_capita_band(per_capita);

    ScoreComponent {
        dimension: AssessmentDimension::Financial,
        basis: per_capita,
        score,
        notes: format!(
            "per-capita income {:.2} across {} member(s)",
            per_capita, financials.family_size
        ),
    }
}

pub(crate) fn score_dependents(
    members: &[FamilyMember],
    weights: &DependentWeights,
) -> ScoreComponent {
    let mut total_weight = 0.0;
    let mut dependents = 0usize;

    for member in members.iter().filter(|member| member.is_dependent) {
        dependents += 1;

        if member.relationship_mentions(SPOUSE_KEYWORDS) {
            total_weight += weights.spouse;
        } else if member.relationship_mentions(PARENT_KEYWORDS) {
            total_weight += weights.elderly_parent;
        } else if member.relationship_mentions(CHILD_KEYWORDS) {
            total_weight += weights.child;
        }

        if member.has_disability {
            total_weight += weights.disabled_member;
        }

        if member.relationship_mentions(DAUGHTER_KEYWORDS)
            && member.marital_status.is_unmarried()
        {
            total_weight += weights.unmarried_daughter;
        }
    }

    ScoreComponent {
        dimension: AssessmentDimension::Dependents,
        basis: total_weight,
        score: weight_band(total_weight),
        notes: format!("{dependents} dependent(s) carrying weight {total_weight:.2}"),
    }
}

pub(crate) fn score_social_status(
    members: &[FamilyMember],
    housing: HousingCondition,
    is_widow_headed: bool,
    weights: &SocialStatusWeights,
) -> ScoreComponent {
    let mut total_weight = 0.0;
    let mut factors = Vec::new();

    if is_widow_headed {
        total_weight += weights.widow;
        factors.push("widow-headed".to_string());
    }

    if has_orphan(members) {
        total_weight += weights.orphan;
        factors.push("orphaned child".to_string());
    }

    let disabled = members.iter().filter(|member| member.has_disability).count();
    if disabled > 0 {
        total_weight += weights.disabled * disabled as f64;
        factors.push(format!("{disabled} disabled member(s)"));
    }

    let adult_male_earners = members
        .iter()
        .filter(|member| {
            member.age >= ADULT_AGE
                && member.monthly_income > 0.0
                && !member.relationship_mentions(NON_EARNER_KEYWORDS)
        })
        .count();
    if adult_male_earners == 0 {
        total_weight += weights.female_headed;
        factors.push("no adult male earner".to_string());
    }

    if housing.is_substandard() {
        total_weight += weights.poor_housing;
        factors.push(format!("{} housing", housing.label()));
    }

    let notes = if factors.is_empty() {
        "no social vulnerability factors".to_string()
    } else {
        format!("{} (weight {total_weight:.2})", factors.join(", "))
    };

    ScoreComponent {
        dimension: AssessmentDimension::SocialStatus,
        basis: total_weight,
        score: weight_band(total_weight),
        notes,
    }
}

/// A minor son or daughter with no father or mother anywhere in the household.
fn has_orphan(members: &[FamilyMember]) -> bool {
    let has_parent = members
        .iter()
        .any(|member| member.relationship_mentions(PARENT_KEYWORDS));
    if has_parent {
        return false;
    }

    members
        .iter()
        .any(|member| member.relationship_mentions(CHILD_KEYWORDS) && member.age < ADULT_AGE)
}

pub(crate) fn score_officer(report: &OfficerReport) -> ScoreComponent {
    let raw = report.officer_score;
    let clamped = if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, f64::from(MAX_DIMENSION_SCORE))
    };
    let score = clamped.round() as u8;

    let notes = if clamped == raw {
        format!("field officer rated {raw}")
    } else {
        format!("field officer rating {raw} clamped to {clamped}")
    };

    ScoreComponent {
        dimension: AssessmentDimension::Officer,
        basis: clamped,
        score,
        notes,
    }
}
