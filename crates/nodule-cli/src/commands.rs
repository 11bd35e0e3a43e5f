use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use nodule_cli::case::{
    FleischnerCase, LungRadsCase, evaluate_fleischner, evaluate_lung_rads, load_case,
};
use nodule_model::LungRadsCategory;
use nodule_normalization::{classify_growth, parse_exam_date, parse_measurement, round_lung_rads};

use crate::cli::{CaseArgs, GrowthArgs, OutputArg};
use crate::summary::{print_categories, print_fleischner, print_growth, print_lung_rads};

pub fn run_fleischner(args: &CaseArgs, output: OutputArg) -> Result<()> {
    let case: FleischnerCase = load_case(&args.case)?;
    let report = evaluate_fleischner(&case)
        .with_context(|| format!("normalize measurements in {}", args.case.display()))?;
    info!(
        recommendation = %report.recommendation.recommendation,
        "Fleischner case evaluated"
    );
    match output {
        OutputArg::Table => print_fleischner(&report),
        OutputArg::Json => print_json(&report)?,
    }
    Ok(())
}

pub fn run_lung_rads(args: &CaseArgs, output: OutputArg) -> Result<()> {
    let case: LungRadsCase = load_case(&args.case)?;
    let report = evaluate_lung_rads(&case)
        .with_context(|| format!("normalize measurements in {}", args.case.display()))?;
    for note in &report.notes {
        warn!(%note, "measurement note");
    }
    info!(
        category = %report.result.display_category(),
        "Lung-RADS case evaluated"
    );
    match output {
        OutputArg::Table => print_lung_rads(&report),
        OutputArg::Json => print_json(&report)?,
    }
    Ok(())
}

pub fn run_categories(output: OutputArg) -> Result<()> {
    match output {
        OutputArg::Table => print_categories(),
        OutputArg::Json => {
            let categories: Vec<CategoryRow> = LungRadsCategory::ALL
                .iter()
                .map(|category| CategoryRow {
                    category: *category,
                    description: category.description(),
                    probability_of_malignancy: category.probability_of_malignancy(),
                })
                .collect();
            print_json(&categories)?;
        }
    }
    Ok(())
}

pub fn run_growth(args: &GrowthArgs, output: OutputArg) -> Result<()> {
    let prior_mm = parse_size(&args.prior, "prior")?;
    let current_mm = parse_size(&args.current, "current")?;
    let prior_date = parse_date(&args.prior_date, "prior")?;
    let current_date = parse_date(&args.current_date, "current")?;

    let assessment = classify_growth(prior_mm, current_mm, prior_date, current_date)
        .context("classify growth")?;
    if let Some(note) = assessment.review_note() {
        warn!(%note, "growth needs review");
    }
    match output {
        OutputArg::Table => print_growth(&assessment),
        OutputArg::Json => print_json(&assessment)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    category: LungRadsCategory,
    description: &'static str,
    probability_of_malignancy: &'static str,
}

fn parse_size(text: &str, which: &str) -> Result<f64> {
    parse_measurement(text)
        .map(round_lung_rads)
        .ok_or_else(|| anyhow!("{which} size '{text}' is not a number"))
}

fn parse_date(text: &str, which: &str) -> Result<NaiveDate> {
    parse_exam_date(text).ok_or_else(|| anyhow!("{which} date '{text}' is not a date"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize result")?;
    println!("{json}");
    Ok(())
}
