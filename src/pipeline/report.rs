use std::fmt;
use std::path::PathBuf;

use crate::types::LabelCounts;

/// Why a whole source contributed nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The listed path does not exist
    MissingSource,
    /// The file exists but could not be opened or parsed
    UnreadableSource(String),
    /// No known title/text column pattern matched
    UnrecognizedSchema,
    /// Title and text resolved but there is no label column
    MissingLabelColumn,
}

impl SkipReason {
    /// Short metric label
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::MissingSource => "missing_source",
            SkipReason::UnreadableSource(_) => "unreadable_source",
            SkipReason::UnrecognizedSchema => "unrecognized_schema",
            SkipReason::MissingLabelColumn => "missing_label_column",
        }
    }

    /// The user-facing warning line for a skipped source
    pub fn warning(&self, source: &str) -> String {
        match self {
            SkipReason::MissingSource => format!("Warning: File {} not found. Skipping.", source),
            SkipReason::UnreadableSource(detail) => format!(
                "Warning: File {} could not be read ({}). Skipping.",
                source, detail
            ),
            SkipReason::UnrecognizedSchema => format!(
                "Warning: {} does not have recognizable title/text columns. Skipping.",
                source
            ),
            SkipReason::MissingLabelColumn => {
                format!("Warning: {} has no 'label' column. Skipping.", source)
            }
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnreadableSource(detail) => write!(f, "unreadable source: {}", detail),
            other => f.write_str(&other.label().replace('_', " ")),
        }
    }
}

/// What one source did during the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Skipped(SkipReason),
    Contributed {
        /// Rows with a resolved label
        kept: usize,
        /// Rows dropped for an unresolved label
        dropped: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: String,
    pub status: SourceStatus,
}

impl SourceReport {
    pub fn contributed(&self) -> bool {
        matches!(self.status, SourceStatus::Contributed { .. })
    }
}

/// Result of a run that wrote an output table
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub sources: Vec<SourceReport>,
    pub label_counts: LabelCounts,
    pub output: PathBuf,
}

impl MergeReport {
    pub fn total_records(&self) -> usize {
        self.label_counts.total()
    }

    pub fn summary(&self) -> String {
        format!(
            "Total samples: {} ({})",
            self.total_records(),
            self.label_counts
        )
    }
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(MergeReport),
    /// Every source was skipped; nothing was written
    NoOp { sources: Vec<SourceReport> },
}

impl RunOutcome {
    pub fn sources(&self) -> &[SourceReport] {
        match self {
            RunOutcome::Completed(report) => &report.sources,
            RunOutcome::NoOp { sources } => sources,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, RunOutcome::NoOp { .. })
    }
}
