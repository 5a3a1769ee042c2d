use super::super::domain::{CategoryColor, NeedsCategory};
use super::config::ScoringRanges;

const CATEGORY_1_FACILITIES: &[&str] = &[
    "Monthly ration support",
    "Full education sponsorship for children",
    "Medical treatment assistance",
    "Housing repair assistance",
    "Marriage support for daughters",
    "Priority access to donated marketplace goods",
];

const CATEGORY_2_FACILITIES: &[&str] = &[
    "Partial education sponsorship",
    "Medical treatment assistance",
    "Seasonal ration packages",
    "Access to donated marketplace goods",
];

const CATEGORY_3_FACILITIES: &[&str] = &[
    "Skill development programs",
    "Seasonal ration packages",
    "Access to donated marketplace goods",
];

/// Category 1 is checked first, then category 2. Anything else, including totals outside
/// both ranges on either side, lands in category 3.
pub(crate) fn determine_category(
    total_score: u8,
    ranges: &ScoringRanges,
) -> (NeedsCategory, CategoryColor) {
    let category = if ranges.category_1.contains(total_score) {
        NeedsCategory::Category1
    } else if ranges.category_2.contains(total_score) {
        NeedsCategory::Category2
    } else {
        NeedsCategory::Category3
    };

    (category, category.color())
}

pub fn eligible_facilities(category: NeedsCategory) -> &'static [&'static str] {
    match category {
        NeedsCategory::Category1 => CATEGORY_1_FACILITIES,
        NeedsCategory::Category2 => CATEGORY_2_FACILITIES,
        NeedsCategory::Category3 => CATEGORY_3_FACILITIES,
    }
}
