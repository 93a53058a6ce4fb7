//! Pouët route recognition.
//!
//! A linkable Pouët URL is the fixed page `https://www.pouet.net/prod.php`
//! with the production ID in the `which` query parameter.

use crate::catalog::Paste;
use url::Url;

/// Loose upper bound on plausible Pouët production IDs.
pub const SANITY_CEILING: i64 = 200_000;

const PROD_PATH: &str = "/prod.php";
const ID_PARAM: &str = "which";

/// Extract a production ID from an already host-checked Pouët URL.
pub fn extract(url: &Url) -> Paste {
    if url.path() != PROD_PATH {
        tracing::debug!(path = url.path(), "pouet URL is not the prod page");
        return Paste::Rejected;
    }
    let Some(which) = url.query_pairs().find(|(key, _)| key == ID_PARAM).map(|(_, value)| value) else {
        return Paste::Rejected;
    };
    match which.parse::<u64>() {
        Ok(id) => Paste::Id(id),
        Err(_) => Paste::Rejected,
    }
}
