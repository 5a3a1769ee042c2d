use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Household money flows reported during the field survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseholdFinancials {
    pub total_income: f64,
    pub total_expenses: f64,
    pub family_size: i32,
}

impl HouseholdFinancials {
    /// Net monthly income per household member. Negative when expenses exceed income,
    /// zero when the family size is not positive.
    pub fn per_capita_income(&self) -> f64 {
        if self.family_size <= 0 {
            return 0.0;
        }

        (self.total_income - self.total_expenses) / f64::from(self.family_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Separated,
    /// Any status the survey form records that is not listed above.
    #[serde(other)]
    Other,
}

impl MaritalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
            MaritalStatus::Separated => "separated",
            MaritalStatus::Other => "other",
        }
    }

    /// Single or divorced, the statuses that qualify a daughter as unmarried.
    pub const fn is_unmarried(self) -> bool {
        matches!(self, MaritalStatus::Single | MaritalStatus::Divorced)
    }
}

/// Member of the surveyed household.
///
/// `relationship` is free text entered by the field officer ("Wife", "elder son",
/// "Mother-in-law"); scoring matches it by case-insensitive keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    pub age: i32,
    pub relationship: String,
    pub marital_status: MaritalStatus,
    pub monthly_income: f64,
    #[serde(default)]
    pub has_disability: bool,
    #[serde(default)]
    pub is_dependent: bool,
}

impl FamilyMember {
    /// True when the relationship text contains any of the lowercase `keywords`.
    pub fn relationship_mentions(&self, keywords: &[&str]) -> bool {
        let relationship = self.relationship.to_lowercase();
        keywords
            .iter()
            .any(|keyword| relationship.contains(keyword))
    }
}

/// Housing condition observed during the field visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl HousingCondition {
    pub const fn label(self) -> &'static str {
        match self {
            HousingCondition::Excellent => "excellent",
            HousingCondition::Good => "good",
            HousingCondition::Fair => "fair",
            HousingCondition::Poor => "poor",
            HousingCondition::VeryPoor => "very_poor",
        }
    }

    pub const fn is_substandard(self) -> bool {
        matches!(self, HousingCondition::Poor | HousingCondition::VeryPoor)
    }
}

/// Field officer's judgment recorded after the home visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerReport {
    pub officer_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Everything the engine needs to assess one household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub financials: HouseholdFinancials,
    pub family_members: Vec<FamilyMember>,
    pub housing_condition: HousingCondition,
    pub officer_report: OfficerReport,
    #[serde(default)]
    pub is_widow_headed: bool,
}

/// Needs tier driving welfare facility eligibility. Category 1 is the highest need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NeedsCategory {
    #[serde(rename = "category_1")]
    Category1,
    #[serde(rename = "category_2")]
    Category2,
    #[serde(rename = "category_3")]
    Category3,
}

impl NeedsCategory {
    pub const ALL: [NeedsCategory; 3] = [
        NeedsCategory::Category1,
        NeedsCategory::Category2,
        NeedsCategory::Category3,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            NeedsCategory::Category1 => "category_1",
            NeedsCategory::Category2 => "category_2",
            NeedsCategory::Category3 => "category_3",
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            NeedsCategory::Category1 => 1,
            NeedsCategory::Category2 => 2,
            NeedsCategory::Category3 => 3,
        }
    }

    pub const fn color(self) -> CategoryColor {
        match self {
            NeedsCategory::Category1 => CategoryColor::White,
            NeedsCategory::Category2 => CategoryColor::Yellow,
            NeedsCategory::Category3 => CategoryColor::Green,
        }
    }

    /// Accepts `category_1`, `category-1`, `1` and similar spellings.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        let digit = normalized
            .strip_prefix("category_")
            .or_else(|| normalized.strip_prefix("category"))
            .unwrap_or(normalized.as_str());

        match digit {
            "1" => Some(NeedsCategory::Category1),
            "2" => Some(NeedsCategory::Category2),
            "3" => Some(NeedsCategory::Category3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryColor {
    White,
    Yellow,
    Green,
}

impl CategoryColor {
    pub const fn label(self) -> &'static str {
        match self {
            CategoryColor::White => "white",
            CategoryColor::Yellow => "yellow",
            CategoryColor::Green => "green",
        }
    }
}

/// Scoring dimensions summed into the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentDimension {
    Financial,
    Dependents,
    SocialStatus,
    Officer,
}

/// One dimension's contribution, kept so reviewers can audit how a score was reached.
///
/// `basis` is the value the band was looked up from: per-capita income for the financial
/// dimension, accumulated weight for dependents and social status, and the clamped
/// officer score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub dimension: AssessmentDimension,
    pub basis: f64,
    pub score: u8,
    pub notes: String,
}

/// Derived snapshot of an assessment. Never updated in place; reassessment produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub financial_score: u8,
    pub dependents_score: u8,
    pub social_status_score: u8,
    pub officer_score: u8,
    pub total_score: u8,
    pub category: NeedsCategory,
    pub category_color: CategoryColor,
    pub per_capita_income: f64,
    pub components: Vec<ScoreComponent>,
    pub calculated_at: DateTime<Utc>,
}

impl AssessmentScores {
    /// Scores with the audit trail and timestamp stripped, for comparing two runs.
    pub fn tally(&self) -> (u8, u8, u8, u8, u8, NeedsCategory) {
        (
            self.financial_score,
            self.dependents_score,
            self.social_status_score,
            self.officer_score,
            self.total_score,
            self.category,
        )
    }
}
