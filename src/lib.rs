//! mirror-lint - structural checker for mirror class headers
//!
//! Enforces the slot convention: every instance field declared inside a
//! tracked class/struct body of a `.hpp` header must go through the
//! `ST_SLOT(...)` wrapper so external tooling can enumerate fields
//! reflectively. The library splits into a pure line classifier and a
//! tree walker that owns all I/O; the binary wires them to a CLI.

pub mod classifier;
pub mod domain;
pub mod report;
pub mod walker;

// Re-export main types for convenient access
pub use domain::violations::{
    MirrorError, MirrorResult, ScanReport, Violation, EXIT_CLEAN, EXIT_USAGE, EXIT_VIOLATIONS,
};

pub use classifier::{LineClassifier, ScanState, SLOT_MARKER};

pub use report::{OutputFormat, ReportFormatter};

pub use walker::{Scanner, HEADER_EXTENSION, SKIP_FILES};

use std::path::Path;

/// Convenience function to scan a directory tree with default settings
pub fn scan_directory<P: AsRef<Path>>(root: P) -> MirrorResult<ScanReport> {
    let scanner = Scanner::new()?;
    scanner.scan(root)
}
