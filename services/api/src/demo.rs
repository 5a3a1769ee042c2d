use crate::infra::default_assessment_config;
use chrono::Local;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use welfare_assessment::config::load_assessment_config;
use welfare_assessment::error::AppError;
use welfare_assessment::workflows::assessment::{
    eligible_facilities, AssessmentEngine, AssessmentInput, AssessmentScores, FamilyMember,
    HouseholdFinancials, HousingCondition, MaritalStatus, OfficerReport, ValidationReport,
};
use welfare_assessment::workflows::survey::SurveyServiceError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding the household (financials, family_members, housing_condition, officer_report)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Optional JSON file overriding thresholds and weights
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Refuse to score when validation reports problems
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the assessment as JSON instead of a readable breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Treat the sample household as widow-headed.
    #[arg(long)]
    pub(crate) widow_headed: bool,
    /// Print the assessment as JSON instead of a readable breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        config,
        strict,
        json,
    } = args;

    let config = match config {
        Some(path) => load_assessment_config(path)?,
        None => default_assessment_config(),
    };
    let raw = fs::read_to_string(&input)?;
    let household: AssessmentInput = serde_json::from_str(&raw)?;

    let engine = AssessmentEngine::new(config);
    let report = engine.validate(&household);
    if strict && !report.is_valid {
        render_validation(&report);
        return Err(SurveyServiceError::Validation(report).into());
    }

    let scores = engine.calculate_assessment(&household);
    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        render_validation(&report);
        render_assessment(&scores);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { widow_headed, json } = args;

    let engine = AssessmentEngine::new(default_assessment_config());
    let household = sample_household(widow_headed);
    let scores = engine.calculate_assessment(&household);

    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    println!("Beneficiary assessment demo");
    println!(
        "Household: {} member(s) listed, family size {}, housing {}{}",
        household.family_members.len(),
        household.financials.family_size,
        household.housing_condition.label(),
        if household.is_widow_headed {
            ", widow-headed"
        } else {
            ""
        }
    );
    for member in &household.family_members {
        println!("- {}", describe_member(member));
    }
    render_validation(&engine.validate(&household));
    render_assessment(&scores);

    Ok(())
}

fn describe_member(member: &FamilyMember) -> String {
    let mut flags = Vec::new();
    if member.is_dependent {
        flags.push("dependent");
    }
    if member.has_disability {
        flags.push("disabled");
    }

    let mut line = format!(
        "{} ({}, {}, {}), income {:.2}",
        member.name,
        member.relationship,
        member.age,
        member.marital_status.label(),
        member.monthly_income
    );
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

fn render_validation(report: &ValidationReport) {
    if report.is_valid {
        println!("Validation: passed");
    } else {
        println!("Validation: {} problem(s)", report.errors.len());
        for error in &report.errors {
            println!("- {}", error);
        }
    }
}

pub(crate) fn render_assessment(scores: &AssessmentScores) {
    println!("\nScore breakdown");
    for component in &scores.components {
        println!(
            "- {:?}: {}/5 ({})",
            component.dimension, component.score, component.notes
        );
    }

    println!(
        "\nTotal score: {}/20 -> {} ({})",
        scores.total_score,
        scores.category.label(),
        scores.category_color.label()
    );
    println!("Per-capita income: {:.2}", scores.per_capita_income);
    println!(
        "Calculated at: {}",
        scores
            .calculated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M %Z")
    );

    println!("\nEligible facilities");
    for facility in eligible_facilities(scores.category) {
        println!("- {}", facility);
    }
}

pub(crate) fn sample_household(widow_headed: bool) -> AssessmentInput {
    AssessmentInput {
        financials: HouseholdFinancials {
            total_income: 5_200.0,
            total_expenses: 2_400.0,
            family_size: 5,
        },
        family_members: vec![
            FamilyMember {
                name: "Nasreen Akhtar".to_string(),
                age: 44,
                relationship: "Head".to_string(),
                marital_status: if widow_headed {
                    MaritalStatus::Widowed
                } else {
                    MaritalStatus::Married
                },
                monthly_income: 5_200.0,
                has_disability: false,
                is_dependent: false,
            },
            FamilyMember {
                name: "Zubair".to_string(),
                age: 15,
                relationship: "Son".to_string(),
                marital_status: MaritalStatus::Single,
                monthly_income: 0.0,
                has_disability: true,
                is_dependent: true,
            },
            FamilyMember {
                name: "Iqra".to_string(),
                age: 20,
                relationship: "Daughter".to_string(),
                marital_status: MaritalStatus::Single,
                monthly_income: 0.0,
                has_disability: false,
                is_dependent: true,
            },
            FamilyMember {
                name: "Hajra Bibi".to_string(),
                age: 71,
                relationship: "Mother".to_string(),
                marital_status: MaritalStatus::Widowed,
                monthly_income: 0.0,
                has_disability: false,
                is_dependent: true,
            },
        ],
        housing_condition: HousingCondition::Poor,
        officer_report: OfficerReport {
            officer_score: 4.0,
            remarks: Some("Two-room rented house, damp walls".to_string()),
        },
        is_widow_headed: widow_headed,
    }
}
