//! Deterministic source formatting.
//!
//! The formatter canonicalizes assembled text: trimmed lines re-indented by
//! brace depth, runs of blank lines collapsed, exactly one trailing
//! newline. Canonical output re-formats to itself, so formatting is
//! idempotent. Text with unbalanced delimiters cannot have come from a
//! correct assembly and is rejected as a synthesis failure.

use thiserror::Error;

/// Indentation unit for formatted output.
const INDENT: &str = "    ";

/// Formatting failure for one assembled unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text has no content to format.
    #[error("assembled source is empty")]
    Empty,

    /// A delimiter never closes, or closes more often than it opens.
    #[error("unbalanced '{0}' delimiter")]
    Unbalanced(char),
}

/// An idempotent source formatter.
pub trait Formatter {
    /// Formats assembled source text, or rejects it as malformed.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// The default canonical formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        if source.trim().is_empty() {
            return Err(FormatError::Empty);
        }
        check_balanced(source)?;

        let mut out = String::new();
        let mut depth: usize = 0;
        let mut previous_blank = false;

        for raw in source.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                // Collapse runs of blank lines; never start with one.
                if !out.is_empty() && !previous_blank {
                    out.push('\n');
                    previous_blank = true;
                }
                continue;
            }
            previous_blank = false;

            let leading_close = trimmed.starts_with('}') || trimmed.starts_with(')');
            if leading_close {
                depth = depth.saturating_sub(1);
            }

            for _ in 0..depth {
                out.push_str(INDENT);
            }
            out.push_str(trimmed);
            out.push('\n');

            let opens = trimmed.matches(['{', '(']).count();
            let closes = trimmed.matches(['}', ')']).count();
            let consumed = usize::from(leading_close);
            depth = (depth + opens + consumed).saturating_sub(closes);
        }

        // Canonical text never ends in a blank line.
        while out.ends_with("\n\n") {
            out.pop();
        }
        Ok(out)
    }
}

fn check_balanced(source: &str) -> Result<(), FormatError> {
    for (open, close) in [('{', '}'), ('(', ')')] {
        let mut depth: i64 = 0;
        for c in source.chars() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth < 0 {
                    return Err(FormatError::Unbalanced(close));
                }
            }
        }
        if depth != 0 {
            return Err(FormatError::Unbalanced(open));
        }
    }
    Ok(())
}
