use std::collections::HashSet;

use crate::constants::{CLAIM_COLUMN, FULL_TEXT_COLUMN, TEXT_COLUMN, TITLE_COLUMN};

/// A recognized source schema: which columns feed the canonical title and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPattern {
    pub name: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

impl ColumnPattern {
    fn matches(&self, available: &HashSet<&str>) -> bool {
        available.contains(self.title) && available.contains(self.text)
    }
}

/// Known schemas in priority order; the first match wins
pub const COLUMN_PATTERNS: [ColumnPattern; 3] = [
    ColumnPattern {
        name: "title_text",
        title: TITLE_COLUMN,
        text: TEXT_COLUMN,
    },
    ColumnPattern {
        name: "title_full_text",
        title: TITLE_COLUMN,
        text: FULL_TEXT_COLUMN,
    },
    // politifact-style exports carry the headline as a claim
    ColumnPattern {
        name: "claim_full_text",
        title: CLAIM_COLUMN,
        text: FULL_TEXT_COLUMN,
    },
];

/// Column names that feed the canonical title and text. Both are guaranteed to
/// exist in the schema they were resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub title: String,
    pub text: String,
    pub pattern: &'static str,
}

/// Map the columns a source offers onto the canonical (title, text) pair.
/// Returns `None` when no known pattern matches.
pub fn resolve_columns(available: &HashSet<&str>) -> Option<ResolvedColumns> {
    COLUMN_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(available))
        .map(|pattern| ResolvedColumns {
            title: pattern.title.to_string(),
            text: pattern.text.to_string(),
            pattern: pattern.name,
        })
}
