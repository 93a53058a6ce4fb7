//! Repository path and branch name sanitization.
//!
//! Two flavors share one pipeline:
//!
//! - `Generic` — a plain repository-relative path (also used for the color
//!   ramp path field).
//! - `GitBranch` — additionally refuses fully-qualified refs (`refs/...`);
//!   the backend expects a short branch name.
//!
//! Full URLs are rejected outright rather than rewritten, so a pasted
//! `https://github.com/...` never silently turns into garbage.

use crate::api::{FieldAttrs, Outcome};
use crate::error::ConfigError;

/// Which sanitization rules apply to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFlavor {
    Generic,
    GitBranch,
}

/// Sanitize a path-like field value.
///
/// Empty (after trimming) is a [`Verdict::Skip`](crate::Verdict::Skip): the
/// field is untouched and unjudged. A value containing a scheme separator
/// (`://`), or a `refs/` prefix in the `GitBranch` flavor, is invalid and
/// returned unrewritten. Anything else is stripped to `[A-Za-z0-9\-._/]`,
/// doubled separators are collapsed, a single leading `/` is dropped, and the
/// result is invalid only if it exceeds the declared `maxlength`.
///
/// # Errors
///
/// Fails fast with [`ConfigError::MissingConstraint`] when the field declares
/// no `maxlength`.
pub fn sanitize_path(raw: &str, flavor: PathFlavor, attrs: &FieldAttrs) -> Result<Outcome, ConfigError> {
    let max = attrs.maxlength.ok_or(ConfigError::MissingConstraint("maxlength"))?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Outcome::skip(raw));
    }

    if trimmed.contains("://") {
        tracing::debug!(value = trimmed, "rejected path containing a URL scheme");
        return Ok(Outcome::invalid(raw));
    }
    if flavor == PathFlavor::GitBranch && trimmed.starts_with("refs/") {
        tracing::debug!(value = trimmed, "rejected fully-qualified ref as branch name");
        return Ok(Outcome::invalid(raw));
    }

    let cleaned = regex!(r"[^A-Za-z0-9\-._/]").replace_all(trimmed, "");
    let collapsed = regex!(r"/{2,}").replace_all(&cleaned, "/");
    let canon = collapsed.strip_prefix('/').unwrap_or(&collapsed);

    if canon.chars().count() > max {
        return Ok(Outcome::invalid(canon));
    }
    Ok(Outcome::valid(canon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Verdict;

    fn attrs() -> FieldAttrs {
        FieldAttrs::optional(0, 255)
    }

    #[test]
    fn empty_is_a_no_op() {
        let out = sanitize_path("   ", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.verdict, Verdict::Skip);
        assert_eq!(out.value, "   ");
    }

    #[test]
    fn urls_are_rejected_unrewritten() {
        let out = sanitize_path("https://github.com/x/y", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.verdict, Verdict::Invalid);
        assert_eq!(out.value, "https://github.com/x/y");
    }

    #[test]
    fn doubled_separators_collapse() {
        let out = sanitize_path("a//b///c", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.verdict, Verdict::Valid);
        assert_eq!(out.value, "a/b/c");
    }

    #[test]
    fn leading_separator_is_dropped_once() {
        let out = sanitize_path("/art/ramps", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.value, "art/ramps");

        // A run of leading slashes collapses first, then the single strip.
        let out = sanitize_path("///art", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.value, "art");
    }

    #[test]
    fn disallowed_characters_are_stripped() {
        let out = sanitize_path("src/an si?.bin", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.value, "src/ansi.bin");
    }

    #[test]
    fn refs_prefix_only_matters_for_branches() {
        let out = sanitize_path("refs/heads/main", PathFlavor::GitBranch, &attrs()).unwrap();
        assert_eq!(out.verdict, Verdict::Invalid);
        assert_eq!(out.value, "refs/heads/main");

        let out = sanitize_path("refs/heads/main", PathFlavor::Generic, &attrs()).unwrap();
        assert_eq!(out.verdict, Verdict::Valid);
        assert_eq!(out.value, "refs/heads/main");
    }

    #[test]
    fn overlong_result_is_invalid() {
        let attrs = FieldAttrs::optional(0, 4);
        let out = sanitize_path("a/b/c", PathFlavor::Generic, &attrs).unwrap();
        assert_eq!(out.verdict, Verdict::Invalid);
        assert_eq!(out.value, "a/b/c");
    }

    #[test]
    fn missing_maxlength_is_a_config_error() {
        let bare = FieldAttrs { required: false, minlength: None, maxlength: None };
        assert_eq!(
            sanitize_path("a/b", PathFlavor::Generic, &bare),
            Err(ConfigError::MissingConstraint("maxlength"))
        );
    }
}
