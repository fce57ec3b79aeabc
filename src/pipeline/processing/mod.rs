// Pipeline processing: schema resolution, label normalization, and text cleaning

pub mod clean;
pub mod label;
pub mod resolve;

pub use clean::{build_content, clean_text};
pub use label::normalize_label;
pub use resolve::{resolve_columns, ResolvedColumns};
