//! Demozoo route recognition.
//!
//! A linkable Demozoo URL looks like `https://demozoo.org/<section>/<id>/`
//! where `<section>` is one of a small, fixed set. Anything else on the host
//! is a real page but not a production we can link.

use crate::catalog::Paste;
use url::Url;

/// Loose upper bound on plausible Demozoo production IDs.
pub const SANITY_CEILING: i64 = 450_000;

/// Sections whose second path segment is a linkable production ID.
const SECTIONS: &[&str] = &["productions", "graphics"];

/// Extract a production ID from an already host-checked Demozoo URL.
///
/// The route must have exactly two non-empty path segments (a trailing slash
/// is tolerated), the first drawn from [`SECTIONS`], the second numeric.
pub fn extract(url: &Url) -> Paste {
    let segments: Vec<&str> = match url.path_segments() {
        Some(split) => split.filter(|s| !s.is_empty()).collect(),
        None => return Paste::Rejected,
    };
    let [section, id] = segments[..] else {
        tracing::debug!(path = url.path(), "demozoo URL with unexpected segment count");
        return Paste::Rejected;
    };
    if !SECTIONS.contains(&section) {
        tracing::debug!(section, "demozoo URL outside the linkable sections");
        return Paste::Rejected;
    }
    match id.parse::<u64>() {
        Ok(id) => Paste::Id(id),
        Err(_) => Paste::Rejected,
    }
}
