use crate::types::Label;

/// Normalize a raw label cell to a canonical label.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Missing
/// values and unknown tokens yield `None`; the caller drops those rows.
pub fn normalize_label(raw: Option<&str>) -> Option<Label> {
    let token = raw?.trim().to_lowercase();
    Label::from_token(&token)
}
