//! Directory tree walker and scan orchestration
//!
//! Owns all file I/O: discovers eligible headers under a root directory,
//! reads each one fully, and feeds it to the line classifier. The classifier
//! itself never touches the file system.

use crate::classifier::LineClassifier;
use crate::domain::violations::{MirrorError, MirrorResult, ScanReport};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// File-name suffix of headers eligible for scanning.
pub const HEADER_EXTENSION: &str = ".hpp";

/// File names that legitimately use raw fields and are never scanned.
///
/// `mirror.hpp` defines the slot marker itself and cannot be checked against
/// its own rule.
pub const SKIP_FILES: [&str; 1] = ["mirror.hpp"];

/// Whether a file is eligible for scanning, by name alone.
pub fn is_eligible(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.ends_with(HEADER_EXTENSION) && !SKIP_FILES.contains(&name),
        None => false,
    }
}

/// Walks a directory tree and aggregates classifier output into a report
#[derive(Debug)]
pub struct Scanner {
    classifier: LineClassifier,
}

impl Scanner {
    /// Create a scanner with a freshly built classifier
    pub fn new() -> MirrorResult<Self> {
        Ok(Self { classifier: LineClassifier::new()? })
    }

    /// Scan every eligible header under `root`.
    ///
    /// Fails fast with [`MirrorError::NotADirectory`] before any file is
    /// touched when `root` does not exist or is not a directory. Entries are
    /// visited in file-name order so the violation sequence is reproducible
    /// across platforms. A file that cannot be read aborts the whole scan.
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> MirrorResult<ScanReport> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(MirrorError::NotADirectory { path: root.to_path_buf() });
        }

        let mut report = ScanReport::new();
        let mut files_scanned = 0;

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            if !is_eligible(path) {
                tracing::debug!("skipping ineligible file {}", path.display());
                continue;
            }

            let content = fs::read_to_string(path).map_err(|e| {
                MirrorError::scan(path.display().to_string(), format!("Failed to read file: {e}"))
            })?;

            let violations = self.classifier.scan_lines(path, &content);
            tracing::debug!("{}: {} violation(s)", path.display(), violations.len());

            report.extend_violations(violations);
            files_scanned += 1;
        }

        report.set_files_scanned(files_scanned);
        Ok(report)
    }
}
