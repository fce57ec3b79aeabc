use serde::Serialize;
use std::fmt;

use crate::constants::{FAKE_TOKENS, REAL_TOKENS};

/// Canonical label carried by every output row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "real",
            Label::Fake => "fake",
        }
    }

    /// Match an already lower-cased, trimmed token against the known label sets
    pub fn from_token(token: &str) -> Option<Self> {
        if REAL_TOKENS.contains(&token) {
            Some(Label::Real)
        } else if FAKE_TOKENS.contains(&token) {
            Some(Label::Fake)
        } else {
            None
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source row projected onto the canonical fields, before cleaning.
/// `label` is `None` when the raw value matched no known token.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub title: Option<String>,
    pub text: Option<String>,
    pub label: Option<Label>,
    pub source: String,
}

/// One row of the output table; field order is the output column order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub title: String,
    pub text: String,
    pub content: String,
    pub label: Label,
    pub source: String,
}

/// Per-label row counts for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub real: usize,
    pub fake: usize,
}

impl LabelCounts {
    pub fn record(&mut self, label: Label) {
        match label {
            Label::Real => self.real += 1,
            Label::Fake => self.fake += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.real + self.fake
    }
}

impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "real: {}, fake: {}", self.real, self.fake)
    }
}
