//! Line classifier for mirror class bodies
//!
//! The classifier is a small line-oriented state machine, not a parser: it
//! tracks whether the scan is inside a `class`/`struct` body via a brace
//! counter and flags semicolon-terminated lines that declare bare fields.
//! Each heuristic lives in its own named predicate so it can be tested and
//! replaced independently of the surrounding state machine.
//!
//! Known approximations: nested class/struct bodies are absorbed into the
//! outer body's brace count (no scope stack), multi-line declarations are
//! invisible, and any line containing `(` is assumed to be a method or
//! call-like construct. Unbalanced braces degrade into perpetually-open or
//! prematurely-closed tracking rather than an error.

use crate::domain::violations::{MirrorError, MirrorResult, Violation};
use regex::Regex;
use std::path::Path;

/// Literal token that marks a properly wrapped field declaration.
pub const SLOT_MARKER: &str = "ST_SLOT(";

/// Trimmed-line prefixes that can carry a `;` inside a class body without
/// declaring an instance field.
const ALLOWED_NON_FIELD_PREFIXES: [&str; 10] = [
    "public:",
    "private:",
    "protected:",
    "using ",
    "typedef ",
    "static ",
    "friend ",
    "enum ",
    "struct ",
    "class ",
];

/// Per-file scanner state, threaded through the line loop.
///
/// `brace_depth` is only meaningful while `in_class_body` is true; both
/// fields reset together when the tracked body closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Whether a class/struct header has been seen and its body not yet closed
    pub in_class_body: bool,
    /// Unmatched opening braces since the tracked body was entered
    pub brace_depth: i32,
}

/// Whether a line is blank or a single-line comment after trimming.
///
/// Such lines never toggle state and are never inspected for violations.
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}

/// Whether a trimmed, semicolon-bearing line is an allowed non-field construct.
pub fn is_allowed_non_field(trimmed: &str) -> bool {
    ALLOWED_NON_FIELD_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Whether the line carries the slot-marker token anywhere.
pub fn contains_slot_marker(line: &str) -> bool {
    line.contains(SLOT_MARKER)
}

/// Classifies the lines of one file into violations
#[derive(Debug)]
pub struct LineClassifier {
    /// Matches a `class`/`struct` keyword plus identifier at start-of-content
    class_header: Regex,
}

impl LineClassifier {
    /// Create a classifier with the compiled class-header pattern
    pub fn new() -> MirrorResult<Self> {
        let class_header = Regex::new(r"^\s*(class|struct)\s+\w+").map_err(|e| {
            MirrorError::pattern(format!("Invalid class header pattern: {e}"))
        })?;

        Ok(Self { class_header })
    }

    /// Whether an untrimmed line opens tracking of a class/struct body.
    ///
    /// The opening brace may arrive on a later line; brace accounting in
    /// [`scan_lines`](Self::scan_lines) handles delayed opening.
    pub fn is_class_header(&self, line: &str) -> bool {
        self.class_header.is_match(line)
    }

    /// Scan the full ordered line sequence of one file.
    ///
    /// Pure with respect to I/O: `content` has already been read. Violations
    /// come out in ascending line order with 1-based line numbers.
    pub fn scan_lines(&self, path: &Path, content: &str) -> Vec<Violation> {
        let mut state = ScanState::default();
        let mut violations = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index as u32 + 1;
            let trimmed = line.trim();

            if is_comment_or_blank(line) {
                continue;
            }

            // Only one body is tracked at a time; a nested header inside an
            // open body is absorbed into the brace count below.
            if !state.in_class_body && self.is_class_header(line) {
                state.in_class_body = true;
                tracing::debug!("{}:{}: entering class body", path.display(), line_number);
            }

            if state.in_class_body {
                state.brace_depth += line.matches('{').count() as i32;
                state.brace_depth -= line.matches('}').count() as i32;

                // Field check only applies once at least one '{' is open.
                if state.brace_depth > 0 && line.contains(';') {
                    if line.contains('(') {
                        // Method declaration/definition or call-like
                        // initializer. This also excuses ST_SLOT(...) lines.
                    } else if is_allowed_non_field(trimmed) {
                        // Access specifier, alias, static, friend, or nested
                        // type introducer.
                    } else if !contains_slot_marker(line) {
                        violations.push(Violation::new(
                            path.to_path_buf(),
                            line_number,
                            trimmed,
                        ));
                    }
                }

                // Exit uses the post-accounting depth on the same line.
                if state.brace_depth <= 0 && line.contains('}') {
                    state = ScanState::default();
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn scan(content: &str) -> Vec<Violation> {
        let classifier = LineClassifier::new().unwrap();
        classifier.scan_lines(&PathBuf::from("test.hpp"), content)
    }

    #[test]
    fn test_comments_and_blank_lines_produce_nothing() {
        let content = "// header comment\n\n   \n// class Foo {\n// int x;\n";
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_slot_wrapped_fields_are_clean() {
        let content = "class Foo {\nST_SLOT(int, x);\nST_SLOT(Object*, parent);\n};\n";
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_bare_field_reports_line_and_text() {
        let content = "class Foo {\n  int x;\n};\n";
        let violations = scan(content);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 2);
        assert_eq!(violations[0].line_text, "int x;");
        assert!(violations[0]
            .format_display()
            .ends_with("2: non-slot field in mirror class. Use ST_SLOT(...): int x;"));
    }

    #[rstest]
    #[case("public:")]
    #[case("private:")]
    #[case("protected:")]
    #[case("using Ptr = Object*;")]
    #[case("typedef unsigned long Word;")]
    #[case("static int live_count_;")]
    #[case("friend class GarbageCollector;")]
    #[case("enum Color { RED, GREEN };")]
    #[case("struct Header;")]
    #[case("class Inner;")]
    fn test_allowed_constructs_are_not_violations(#[case] line: &str) {
        assert!(is_allowed_non_field(line.trim()));

        let content = format!("class Foo {{\n  {line}\n}};\n");
        assert!(scan(&content).is_empty());
    }

    #[test]
    fn test_method_lines_are_skipped() {
        let content = "class Foo {\n  void resize(int n);\n  int size() const;\n};\n";
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_nested_enum_then_bare_field() {
        let content = "struct Foo {\n  enum Color { RED, GREEN };\n  int y;\n};\n";
        let violations = scan(content);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 3);
        assert_eq!(violations[0].line_text, "int y;");
    }

    #[test]
    fn test_delayed_opening_brace() {
        // No violation is possible until the first '{' arrives.
        let content = "class Foo\n{\n  int x;\n};\n";
        let violations = scan(content);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 3);
    }

    #[test]
    fn test_header_without_brace_never_enters_violation_state() {
        let content = "class Foo\nint x;\n";
        // brace_depth stays 0, so the field check never fires.
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_body_exit_resets_state() {
        let content = "class Foo {\n};\nint free_standing;\n";
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_second_top_level_class_is_tracked_fresh() {
        let content = "class A {\nST_SLOT(int, a);\n};\nclass B {\n  int b;\n};\n";
        let violations = scan(content);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 5);
        assert_eq!(violations[0].line_text, "int b;");
    }

    #[test]
    fn test_nested_struct_is_absorbed_into_outer_depth() {
        // The inner struct is not tracked separately; its fields are checked
        // against the same rule as the outer body's, and its closing `};`
        // trips the semicolon heuristic while the outer depth is still open.
        let content = "class Outer {\n  struct Inner {\n    int raw;\n  };\n  int also_raw;\n};\n";
        let violations = scan(content);

        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0].line_number, 3);
        assert_eq!(violations[0].line_text, "int raw;");
        assert_eq!(violations[1].line_number, 4);
        assert_eq!(violations[1].line_text, "};");
        assert_eq!(violations[2].line_number, 5);
        assert_eq!(violations[2].line_text, "int also_raw;");
    }

    #[test]
    fn test_balanced_braces_on_one_line_exit_immediately() {
        let content = "struct P { struct Q { int a; }; };\nint outside;\n";
        // Depth goes +2/-2 on the first line and a '}' is present, so the
        // body closes on the same line it opened.
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_premature_close_brace_exits_tracking() {
        let content = "class Foo\n}\nint x;\n";
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_slot_marker_predicate() {
        assert!(contains_slot_marker("  ST_SLOT(int, x);"));
        assert!(!contains_slot_marker("  int x; // ST_SLOT missing paren"));
    }

    #[test]
    fn test_comment_lines_do_not_affect_brace_depth() {
        let content = "class Foo {\n// }\n  int x;\n};\n";
        let violations = scan(content);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 3);
    }
}
