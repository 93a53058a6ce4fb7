//! External catalog identifier handling (Demozoo, Pouët).
//!
//! The editor lets users link an artifact to its entry on the two big scene
//! catalogs. Two input paths feed the same field:
//!
//! - **Paste**: the user pastes a catalog URL; we recognize the route shape
//!   and pull the production ID out of it ([`extract_id`]).
//! - **Manual edit**: the user types an ID directly; only a numeric sanity
//!   check applies ([`manual_id`]).
//!
//! The sanity ceilings are deliberately loose upper bounds on the catalogs'
//! current ID ranges; their only job is to catch obvious typos.

pub mod demozoo;
pub mod pouet;

use url::Url;

/// The external catalogs an artifact can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Demozoo,
    Pouet,
}

impl Catalog {
    /// The exact hostname a pasted URL must carry.
    pub fn host(self) -> &'static str {
        match self {
            Catalog::Demozoo => "demozoo.org",
            Catalog::Pouet => "www.pouet.net",
        }
    }

    /// Upper bound on plausible production IDs, distinct per catalog.
    pub fn sanity_ceiling(self) -> i64 {
        match self {
            Catalog::Demozoo => demozoo::SANITY_CEILING,
            Catalog::Pouet => pouet::SANITY_CEILING,
        }
    }
}

/// Outcome of inspecting pasted text for a catalog URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paste {
    /// Not an absolute URL at all; possibly a raw ID paste. Not an error.
    Ignored,
    /// An absolute URL, but the wrong host or route shape.
    Rejected,
    /// A recognized catalog URL; the caller should replace the field value
    /// with this ID and clear any invalid flag.
    Id(u64),
}

/// Try to extract a production ID from text pasted into a catalog field.
pub fn extract_id(catalog: Catalog, pasted: &str) -> Paste {
    let url = match Url::parse(pasted.trim()) {
        Ok(url) => url,
        Err(_) => return Paste::Ignored,
    };
    if url.host_str() != Some(catalog.host()) {
        tracing::debug!(host = ?url.host_str(), expected = catalog.host(), "pasted URL for the wrong catalog");
        return Paste::Rejected;
    }
    match catalog {
        Catalog::Demozoo => demozoo::extract(&url),
        Catalog::Pouet => pouet::extract(&url),
    }
}

/// Outcome of the numeric-only check applied to plain (non-paste) edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCheck {
    /// Field is empty; nothing to judge yet.
    Unset,
    /// Non-positive: the caller should blank the field.
    Clear,
    /// Non-numeric or above the catalog's sanity ceiling.
    Rejected,
    /// A plausible ID.
    Ok(u64),
}

/// Re-validate a catalog ID field after a plain keystroke edit.
pub fn manual_id(catalog: Catalog, text: &str) -> IdCheck {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return IdCheck::Unset;
    }
    match trimmed.parse::<i64>() {
        Err(_) => IdCheck::Rejected,
        Ok(n) if n <= 0 => IdCheck::Clear,
        Ok(n) if n > catalog.sanity_ceiling() => IdCheck::Rejected,
        Ok(n) => IdCheck::Ok(n as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_id_paste_is_ignored() {
        assert_eq!(extract_id(Catalog::Demozoo, "332978"), Paste::Ignored);
        assert_eq!(extract_id(Catalog::Pouet, "not a url"), Paste::Ignored);
    }

    #[test]
    fn wrong_host_is_rejected() {
        assert_eq!(extract_id(Catalog::Demozoo, "https://www.pouet.net/prod.php?which=1"), Paste::Rejected);
        assert_eq!(extract_id(Catalog::Pouet, "https://demozoo.org/productions/1/"), Paste::Rejected);
        // Near-miss hosts must not pass the exact match.
        assert_eq!(extract_id(Catalog::Demozoo, "https://evil-demozoo.org/productions/1/"), Paste::Rejected);
        assert_eq!(extract_id(Catalog::Pouet, "https://pouet.net/prod.php?which=1"), Paste::Rejected);
    }

    #[test]
    fn manual_edits_apply_the_sanity_ceiling() {
        assert_eq!(manual_id(Catalog::Demozoo, ""), IdCheck::Unset);
        assert_eq!(manual_id(Catalog::Demozoo, "332978"), IdCheck::Ok(332978));
        assert_eq!(manual_id(Catalog::Demozoo, "0"), IdCheck::Clear);
        assert_eq!(manual_id(Catalog::Demozoo, "-5"), IdCheck::Clear);
        assert_eq!(manual_id(Catalog::Demozoo, "seven"), IdCheck::Rejected);
        assert_eq!(manual_id(Catalog::Demozoo, "99999999"), IdCheck::Rejected);
    }

    #[test]
    fn ceilings_differ_per_catalog() {
        let between = pouet::SANITY_CEILING + 1;
        assert!(between <= demozoo::SANITY_CEILING);
        let text = between.to_string();
        assert_eq!(manual_id(Catalog::Pouet, &text), IdCheck::Rejected);
        assert_eq!(manual_id(Catalog::Demozoo, &text), IdCheck::Ok(between as u64));
    }
}
