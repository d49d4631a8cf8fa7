use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use anderson::config::{ReportFormat, Settings};
use anderson::output::{banner, format_json_output, format_terminal_output};

/// Run the audit and render the report. Returns the process exit code.
pub fn handle_check(
    settings: &Settings,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    // CLI format overrides the settings file
    let format = format.unwrap_or(match settings.format {
        Some(ReportFormat::Json) => OutputFormat::Json,
        Some(ReportFormat::Terminal) | None => OutputFormat::Terminal,
    });

    // Files get plain text
    if output.is_some() {
        colored::control::set_override(false);
    }

    if matches!(format, OutputFormat::Terminal) && output.is_none() && !quiet {
        println!("{}", banner());
    }

    let outcome = super::run_audit(settings)?;

    let output_content = match format {
        OutputFormat::Json => format_json_output(&outcome)?,
        OutputFormat::Terminal => format_terminal_output(&outcome),
    };

    match output {
        Some(path) => fs::write(&path, output_content)
            .with_context(|| format!("Failed to write report: {}", path.display()))?,
        None => {
            if !quiet {
                print!("{}", output_content);
            }
        }
    }

    Ok(outcome.exit_code())
}
