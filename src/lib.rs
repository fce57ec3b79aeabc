pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use config::MergerConfig;
pub use error::{MergerError, Result};
pub use pipeline::report::{MergeReport, RunOutcome, SkipReason, SourceReport, SourceStatus};
pub use pipeline::DatasetMerger;
pub use types::{Label, LabelCounts, MergedRecord, NormalizedRecord};
