/// Source files merged by a default run, in merge order.
/// Descriptors are kept literally in the `source` output column.
pub const DEFAULT_SOURCES: [&str; 6] = [
    "True.csv",
    "Fake.csv",
    "fake_or_real_news.csv",
    "gossipcop_fake.csv",
    "gossipcop_real.csv",
    "politifact_fake_real_news_dataset.csv",
];

pub const DEFAULT_OUTPUT: &str = "processed_data.csv";

// Input column names
pub const TITLE_COLUMN: &str = "title";
pub const TEXT_COLUMN: &str = "text";
pub const FULL_TEXT_COLUMN: &str = "full_text";
pub const CLAIM_COLUMN: &str = "claim";
pub const LABEL_COLUMN: &str = "label";

/// Output columns, in the order they are written.
pub const OUTPUT_COLUMNS: [&str; 5] = ["title", "text", "content", "label", "source"];

pub const REAL_TOKENS: [&str; 3] = ["real", "true", "1"];
pub const FAKE_TOKENS: [&str; 4] = ["fake", "false", "0", "faux"];

/// Cell values loaded as missing. Matched exactly, before any trimming.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub const DEFAULT_LOG_DIRECTIVE: &str = "news_merger=info";
pub const LOG_FILE_NAME: &str = "news_merger.log";
