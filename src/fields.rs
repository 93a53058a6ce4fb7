//! Per-kind field validators and normalizers.
//!
//! Each submodule owns one semantic field kind from the artifact editor:
//!
//! - `date` — release year/month/day, individually and as a composite.
//! - `releaser` — group/releaser names (allow-list filter + length window).
//! - `path` — repository paths and Git branch names.
//! - `id` — generic bounded integer identifiers.
//! - `youtube` — YouTube video IDs.
//!
//! All of them are pure: raw text in, verdict (and canonical text) out. The
//! host UI owns presentation, debouncing and any network exchange.

pub mod date;
pub mod id;
pub mod path;
pub mod releaser;
pub mod youtube;

/// Strict integer parse of a trimmed field value. Empty and non-numeric both
/// come back as `None`; the caller decides which of the two it cares about.
pub(crate) fn int_value(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
