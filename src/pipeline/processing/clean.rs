/// Missing values become empty; present values lose leading and trailing
/// whitespace. Internal whitespace and case are left alone.
pub fn clean_text(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// The content field: cleaned title and text joined by one space, cleaned again
/// so an empty side leaves no stray separator.
pub fn build_content(title: &str, text: &str) -> String {
    clean_text(Some(&format!("{} {}", title, text)))
}
