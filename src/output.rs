use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use indexmap::IndexMap;
use serde::Serialize;

use crate::audit::RunOutcome;
use crate::policy::{Assessment, Verdict};

/// Column the verdict label ends at
const LINE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 10;

/// Fixed order for verdict tallies
const VERDICT_ORDER: [Verdict; 5] = [
    Verdict::Approved,
    Verdict::Contraband,
    Verdict::Borderline,
    Verdict::NoLicense,
    Verdict::Unknown,
];

pub const BANNER: &str = "> Hold still citizen, scanning dependencies for contraband...";

pub fn banner() -> String {
    BANNER.blue().to_string()
}

fn label(verdict: Verdict) -> ColoredString {
    let text = match verdict {
        Verdict::Approved => "CHECKS OUT",
        Verdict::Contraband => "CONTRABAND",
        Verdict::Borderline => "BORDERLINE",
        Verdict::NoLicense => "NO LICENSE",
        Verdict::Unknown => "UNKNOWN",
    };
    let padded = format!("{:>width$}", text, width = LABEL_WIDTH);

    match verdict {
        Verdict::Approved => padded.green(),
        Verdict::Contraband => padded.red(),
        Verdict::Borderline => padded.yellow(),
        Verdict::NoLicense => padded.magenta(),
        Verdict::Unknown => padded.cyan(),
    }
}

/// One report line: dependency on the left, label flush to column 80.
pub fn format_line(assessment: &Assessment) -> String {
    let name_width = LINE_WIDTH - LABEL_WIDTH;
    let name = if assessment.dependency.len() >= name_width {
        format!("{} ", assessment.dependency)
    } else {
        format!("{:<width$}", assessment.dependency, width = name_width)
    };
    format!("{}{}", name.white(), label(assessment.verdict))
}

pub fn format_terminal_output(outcome: &RunOutcome) -> String {
    let mut output = String::new();

    for assessment in &outcome.assessments {
        output.push_str(&format_line(assessment));
        output.push('\n');
    }

    let failing = outcome.failures().count();
    let summary = format!(
        "> {} dependencies reported: {} approved, {} failing",
        outcome.assessments.len(),
        outcome.count(Verdict::Approved),
        failing
    );
    if outcome.passed {
        output.push_str(&summary.green().to_string());
    } else {
        output.push_str(&summary.red().to_string());
    }
    output.push('\n');

    output
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub approved: usize,
    pub failing: usize,
    pub by_verdict: IndexMap<Verdict, usize>,
    /// Detected licenses, in order of first appearance
    pub by_license: IndexMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub passed: bool,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub dependencies: &'a [Assessment],
}

pub fn summarize(outcome: &RunOutcome) -> ReportSummary {
    let by_verdict = VERDICT_ORDER
        .iter()
        .map(|verdict| (*verdict, outcome.count(*verdict)))
        .collect();

    let mut by_license: IndexMap<String, usize> = IndexMap::new();
    for license in outcome.assessments.iter().filter_map(|a| a.license.as_ref()) {
        *by_license.entry(license.clone()).or_insert(0) += 1;
    }

    ReportSummary {
        total: outcome.assessments.len(),
        approved: outcome.count(Verdict::Approved),
        failing: outcome.failures().count(),
        by_verdict,
        by_license,
    }
}

pub fn build_json_report(outcome: &RunOutcome) -> JsonReport<'_> {
    JsonReport {
        passed: outcome.passed,
        generated_at: Utc::now(),
        summary: summarize(outcome),
        dependencies: &outcome.assessments,
    }
}

pub fn format_json_output(outcome: &RunOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_json_report(outcome))
}
