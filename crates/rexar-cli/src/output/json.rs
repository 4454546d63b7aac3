//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use rexar_core::ExtractionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput {
            files: Vec<String>,
            files_extracted: usize,
            files_skipped: usize,
            members_rejected: usize,
            archives_expanded: usize,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = ExtractionOutput {
            files: report
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            files_extracted: report.files_extracted,
            files_skipped: report.files_skipped,
            members_rejected: report.members_rejected,
            archives_expanded: report.archives_expanded,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("extract", data);
        Self::output(&output)
    }

    fn format_member_list(&self, format: &str, members: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput {
            format: String,
            entries: Vec<String>,
            total_entries: usize,
        }

        let data = ListOutput {
            format: format.to_string(),
            entries: members.to_vec(),
            total_entries: members.len(),
        };

        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
