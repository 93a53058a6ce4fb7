//! Pure validation and normalization for scene-artifact metadata fields.
//!
//! Each function takes a raw field value (plus the field's declared
//! constraints, where it has any) and returns a verdict and the canonical
//! rewrite of the text. Nothing here touches presentation, storage, or the
//! network: the host UI reads the verdict, toggles its own styling, and owns
//! the debounced lookups this crate only issues tickets for.
//!
//! Two error tiers, deliberately kept apart:
//!
//! - Bad **user input** never errors; it resolves to [`Verdict::Invalid`]
//!   with the input preserved (or canonically rewritten).
//! - Bad **integration** (missing constraint attributes, nonsense ceilings)
//!   fails fast with a [`ConfigError`].

#[macro_use]
mod macros;
mod api;
mod catalog;
mod debounce;
mod error;
mod fields;
mod text;

pub use api::{Context, FieldAttrs, Outcome, Verdict};
pub use catalog::{Catalog, IdCheck, Paste, extract_id, manual_id};
pub use debounce::{Debouncer, LOOKUP_DELAY, Ticket};
pub use error::ConfigError;
pub use fields::date::{DateFlags, DateReport, MIN_YEAR, check_date, valid_day, valid_month, valid_year};
pub use fields::id::valid_bounded_id;
pub use fields::path::{PathFlavor, sanitize_path};
pub use fields::releaser::normalize_releaser;
pub use fields::youtube::valid_youtube_id;
pub use text::{format_bytes, parse_roman, titleize};
