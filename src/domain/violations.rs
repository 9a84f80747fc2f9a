//! Core domain models for mirror layout violations and scan results
//!
//! Violations are immutable once created: the classifier produces them, the
//! reporter consumes them. ScanReport acts as the aggregate for one run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Exit status when no violations were found.
pub const EXIT_CLEAN: i32 = 0;
/// Exit status when one or more violations were found.
pub const EXIT_VIOLATIONS: i32 = 1;
/// Exit status for usage errors (bad arguments, root is not a directory).
pub const EXIT_USAGE: i32 = 2;

/// A field declared without the slot marker inside a tracked class body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// File path where the violation was found
    pub file_path: PathBuf,
    /// Line number (1-indexed) of the offending declaration
    pub line_number: u32,
    /// The offending source line, whitespace-trimmed
    pub line_text: String,
}

impl Violation {
    /// Create a new violation
    pub fn new(file_path: PathBuf, line_number: u32, line_text: impl Into<String>) -> Self {
        Self { file_path, line_number, line_text: line_text.into() }
    }

    /// Format violation for display
    pub fn format_display(&self) -> String {
        format!(
            "{}:{}: non-slot field in mirror class. Use ST_SLOT(...): {}",
            self.file_path.display(),
            self.line_number,
            self.line_text
        )
    }
}

/// Complete result of scanning one directory tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// All violations, in file-discovery order then ascending line order
    pub violations: Vec<Violation>,
    /// Number of eligible files that were scanned
    pub files_scanned: usize,
}

impl ScanReport {
    /// Create a new empty scan report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation to the report
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append all violations produced for one file
    pub fn extend_violations(&mut self, violations: Vec<Violation>) {
        self.violations.extend(violations);
    }

    /// Whether the report contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Set the number of files scanned
    pub fn set_files_scanned(&mut self, count: usize) {
        self.files_scanned = count;
    }

    /// Process exit status this report maps to
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            EXIT_VIOLATIONS
        } else {
            EXIT_CLEAN
        }
    }
}

/// Error types that can occur during a scan
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The scan root does not exist or is not a directory
    #[error("error: not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Heuristic pattern compilation failed
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Scanning failed for a specific file
    #[error("Scan error in {file}: {message}")]
    Scan { file: String, message: String },

    /// Report serialization failed
    #[error("Report error: {message}")]
    Report { message: String },
}

impl MirrorError {
    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern { message: message.into() }
    }

    /// Create a scan error
    pub fn scan(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Scan { file: file.into(), message: message.into() }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report { message: message.into() }
    }
}

/// Result type for mirror-lint operations
pub type MirrorResult<T> = Result<T, MirrorError>;
