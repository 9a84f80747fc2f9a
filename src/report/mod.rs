//! Report generation for scan results
//!
//! Formatters translate a ScanReport into its external representations. The
//! human format reproduces the layout checker's historical stderr output
//! exactly; JSON exists for programmatic consumers. All diagnostics go to
//! the error stream, so formatters write into a caller-supplied writer.

use crate::domain::violations::{MirrorError, MirrorResult, ScanReport};
use std::io::Write;

/// Header line written above the violation list.
const REPORT_HEADER: &str = "Mirror layout violations found:";

/// Supported output formats for scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format, one line per violation
    Human,
    /// JSON format for programmatic consumption
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json"]
    }
}

/// Formats scan reports for output
#[derive(Debug, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Create a new report formatter
    pub fn new() -> Self {
        Self
    }

    /// Format a scan report in the specified format
    pub fn format_report(
        &self,
        report: &ScanReport,
        format: OutputFormat,
    ) -> MirrorResult<String> {
        match format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_report<W: Write>(
        &self,
        report: &ScanReport,
        format: OutputFormat,
        mut writer: W,
    ) -> MirrorResult<()> {
        let formatted = self.format_report(report, format)?;
        writer.write_all(formatted.as_bytes())?;
        Ok(())
    }

    /// Header line plus one line per violation, with a blank separator line
    /// after the header.
    fn format_human(&self, report: &ScanReport) -> String {
        if !report.has_violations() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str(REPORT_HEADER);
        output.push_str("\n\n");

        for violation in &report.violations {
            output.push_str(&violation.format_display());
            output.push('\n');
        }

        output
    }

    /// JSON body with the violation list and scan summary
    fn format_json(&self, report: &ScanReport) -> MirrorResult<String> {
        let json_violations: Vec<serde_json::Value> = report
            .violations
            .iter()
            .map(|v| {
                serde_json::json!({
                    "file_path": v.file_path.display().to_string(),
                    "line_number": v.line_number,
                    "line_text": v.line_text,
                    "message": v.format_display(),
                })
            })
            .collect();

        let json_report = serde_json::json!({
            "violations": json_violations,
            "files_scanned": report.files_scanned,
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| MirrorError::report(format!("JSON serialization failed: {e}")))
    }
}
