// Data processing pipeline: per-source loading and normalization, merge, and output

pub mod ingestion;
pub mod processing;
pub mod report;
pub mod storage;

use metrics::counter;
use tracing::{debug, info, instrument, warn};

use crate::config::MergerConfig;
use crate::constants::LABEL_COLUMN;
use crate::error::Result;
use crate::types::{LabelCounts, MergedRecord, NormalizedRecord};
use ingestion::{load_table, RawTable};
use processing::{build_content, clean_text, normalize_label, resolve_columns};
use report::{MergeReport, RunOutcome, SkipReason, SourceReport, SourceStatus};
use storage::write_merged;

pub const NO_DATA_NOTICE: &str = "No data processed. Check file paths and structures.";

/// Everything one source produced: its status and its projected rows
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub report: SourceReport,
    pub records: Vec<NormalizedRecord>,
}

impl SourceBatch {
    fn skipped(source: &str, reason: SkipReason) -> Self {
        warn!(reason = %reason, "Skipping source");
        println!("{}", reason.warning(source));
        counter!("news_merger_sources_skipped_total", "reason" => reason.label()).increment(1);

        Self {
            report: SourceReport {
                source: source.to_string(),
                status: SourceStatus::Skipped(reason),
            },
            records: Vec::new(),
        }
    }
}

/// Per-source results threaded through the source loop
#[derive(Debug, Default)]
struct Accumulator {
    reports: Vec<SourceReport>,
    records: Vec<NormalizedRecord>,
}

impl Accumulator {
    fn absorb(mut self, batch: SourceBatch) -> Self {
        self.reports.push(batch.report);
        self.records.extend(batch.records);
        self
    }
}

/// Project a loaded table onto normalized records.
///
/// The whole table is rejected when its schema matches no column pattern or
/// it has no label column. Rows whose label does not resolve are kept with
/// `label: None` so the merge step can drop them.
pub fn normalize_table(
    source: &str,
    table: &RawTable,
) -> std::result::Result<Vec<NormalizedRecord>, SkipReason> {
    let columns = resolve_columns(&table.column_names()).ok_or(SkipReason::UnrecognizedSchema)?;
    let label_idx = table
        .column_index(LABEL_COLUMN)
        .ok_or(SkipReason::MissingLabelColumn)?;
    let title_idx = table
        .column_index(&columns.title)
        .ok_or(SkipReason::UnrecognizedSchema)?;
    let text_idx = table
        .column_index(&columns.text)
        .ok_or(SkipReason::UnrecognizedSchema)?;

    debug!(
        "Resolved {} with pattern {} (title={}, text={})",
        source, columns.pattern, columns.title, columns.text
    );

    let records = (0..table.len())
        .map(|row| NormalizedRecord {
            title: table.cell(row, title_idx).map(str::to_string),
            text: table.cell(row, text_idx).map(str::to_string),
            label: normalize_label(table.cell(row, label_idx)),
            source: source.to_string(),
        })
        .collect();

    Ok(records)
}

/// Drop unlabeled records, clean title and text, and derive content.
/// Input order is preserved.
pub fn merge_records(records: Vec<NormalizedRecord>) -> Vec<MergedRecord> {
    records
        .into_iter()
        .filter_map(|record| {
            let label = record.label?;
            let title = clean_text(record.title.as_deref());
            let text = clean_text(record.text.as_deref());
            let content = build_content(&title, &text);
            Some(MergedRecord {
                title,
                text,
                content,
                label,
                source: record.source,
            })
        })
        .collect()
}

/// Runs the merge described by a [`MergerConfig`]
pub struct DatasetMerger {
    config: MergerConfig,
}

impl DatasetMerger {
    pub fn new(config: MergerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergerConfig {
        &self.config
    }

    /// Load, resolve, and normalize a single source. Never fails: problems
    /// with the source are reported as a skip.
    #[instrument(skip(self))]
    pub fn process_source(&self, source: &str) -> SourceBatch {
        let path = self.config.source_path(source);
        if !path.exists() {
            return SourceBatch::skipped(source, SkipReason::MissingSource);
        }

        let table = match load_table(&path) {
            Ok(table) => table,
            Err(e) => {
                let reason = SkipReason::UnreadableSource(e.to_string());
                return SourceBatch::skipped(source, reason);
            }
        };

        let records = match normalize_table(source, &table) {
            Ok(records) => records,
            Err(reason) => return SourceBatch::skipped(source, reason),
        };

        let dropped = records.iter().filter(|r| r.label.is_none()).count();
        let kept = records.len() - dropped;
        info!("Loaded {} rows ({} with unresolved labels)", records.len(), dropped);
        counter!("news_merger_records_dropped_total").increment(dropped as u64);

        SourceBatch {
            report: SourceReport {
                source: source.to_string(),
                status: SourceStatus::Contributed { kept, dropped },
            },
            records,
        }
    }

    /// Run the whole merge: every source in order, then merge, clean, and write.
    ///
    /// Per-source problems never fail the run. The only errors returned are
    /// from writing the output table.
    pub fn run(&self) -> Result<RunOutcome> {
        info!("Starting merge of {} sources", self.config.sources.len());

        let accumulated = self
            .config
            .sources
            .iter()
            .fold(Accumulator::default(), |acc, source| {
                acc.absorb(self.process_source(source))
            });

        if !accumulated.reports.iter().any(SourceReport::contributed) {
            warn!("No source contributed any records");
            println!("{}", NO_DATA_NOTICE);
            return Ok(RunOutcome::NoOp {
                sources: accumulated.reports,
            });
        }

        let merged = merge_records(accumulated.records);

        let mut label_counts = LabelCounts::default();
        for record in &merged {
            label_counts.record(record.label);
            counter!("news_merger_records_written_total", "label" => record.label.as_str())
                .increment(1);
        }

        let output = self.config.output.clone();
        write_merged(&output, &merged)?;

        let report = MergeReport {
            sources: accumulated.reports,
            label_counts,
            output,
        };

        info!(
            total = report.total_records(),
            real = label_counts.real,
            fake = label_counts.fake,
            "Merge complete"
        );
        println!(
            "Preprocessing complete. Merged dataset saved as '{}'.",
            report.output.display()
        );
        println!("{}", report.summary());

        Ok(RunOutcome::Completed(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;
    use super::ingestion::read_table;

    fn table(csv: &str) -> RawTable {
        read_table(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_normalize_table_title_text() {
        let csv = "title,text,label\nT1,Body1,real\nT2,Body2,nope\n";
        let records = normalize_table("A", &table(csv)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title.as_deref(), Some("T1"));
        assert_eq!(records[0].text.as_deref(), Some("Body1"));
        assert_eq!(records[0].label, Some(Label::Real));
        assert_eq!(records[0].source, "A");
        assert_eq!(records[1].label, None);
    }

    #[test]
    fn test_normalize_table_claim_schema() {
        let records = normalize_table(
            "politifact.csv",
            &table("claim,full_text,label\nA claim,Long body,FALSE\n"),
        )
        .unwrap();

        assert_eq!(records[0].title.as_deref(), Some("A claim"));
        assert_eq!(records[0].text.as_deref(), Some("Long body"));
        assert_eq!(records[0].label, Some(Label::Fake));
    }

    #[test]
    fn test_normalize_table_rejects_whole_source() {
        assert_eq!(
            normalize_table("x", &table("headline,body,label\nH,B,real\n")),
            Err(SkipReason::UnrecognizedSchema)
        );
        assert_eq!(
            normalize_table("x", &table("title,text\nH,B\n")),
            Err(SkipReason::MissingLabelColumn)
        );
    }

    #[test]
    fn test_merge_drops_unlabeled_and_builds_content() {
        let records = vec![
            NormalizedRecord {
                title: Some("  T1 ".to_string()),
                text: Some("Body1\n".to_string()),
                label: Some(Label::Real),
                source: "A".to_string(),
            },
            NormalizedRecord {
                title: Some("T2".to_string()),
                text: Some("Body2".to_string()),
                label: None,
                source: "B".to_string(),
            },
            NormalizedRecord {
                title: None,
                text: None,
                label: Some(Label::Fake),
                source: "B".to_string(),
            },
        ];

        let merged = merge_records(records);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "T1");
        assert_eq!(merged[0].text, "Body1");
        assert_eq!(merged[0].content, "T1 Body1");
        assert_eq!(merged[1].title, "");
        assert_eq!(merged[1].content, "");
        assert_eq!(merged[1].label, Label::Fake);
        assert_eq!(merged[1].source, "B");
    }

    #[test]
    fn test_accumulator_preserves_source_order() {
        let batch = |source: &str| SourceBatch {
            report: SourceReport {
                source: source.to_string(),
                status: SourceStatus::Contributed { kept: 1, dropped: 0 },
            },
            records: vec![NormalizedRecord {
                title: Some(source.to_string()),
                text: None,
                label: Some(Label::Real),
                source: source.to_string(),
            }],
        };

        let acc = Accumulator::default().absorb(batch("first")).absorb(batch("second"));
        assert_eq!(acc.reports[0].source, "first");
        assert_eq!(acc.records[1].source, "second");
    }
}
