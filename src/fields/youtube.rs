//! YouTube video IDs.

/// True iff `text` is empty or exactly 11 characters from `[A-Za-z0-9_-]`.
pub fn valid_youtube_id(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    trimmed.chars().count() == 11
        && trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
