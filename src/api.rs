use chrono::{Datelike, Local, NaiveDate};

/// Validation context.
///
/// This holds environment needed to evaluate call-time bounds (like "a release
/// year cannot be in the future").
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference date used for the upper year bound.
    pub today: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap() }
        } else {
            Self { today: Local::now().date_naive() }
        }
    }
}

impl Context {
    /// The current calendar year, read at call time.
    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

/// The outcome of a single validation decision.
///
/// `Skip` means the validator declined to judge: the canonical example is an
/// empty optional field, which is neither valid nor invalid until the user
/// types something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    Skip,
}

impl Verdict {
    /// Convenience for callers that only care about rejection.
    pub fn is_invalid(self) -> bool {
        matches!(self, Verdict::Invalid)
    }
}

/// A verdict paired with the possibly-rewritten field text.
///
/// Normalizers return the canonical form of the input here; validators that
/// reject early return the input unchanged so the caller never loses the
/// user's in-progress text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub value: String,
}

impl Outcome {
    pub(crate) fn valid(value: impl Into<String>) -> Self {
        Outcome { verdict: Verdict::Valid, value: value.into() }
    }

    pub(crate) fn invalid(value: impl Into<String>) -> Self {
        Outcome { verdict: Verdict::Invalid, value: value.into() }
    }

    pub(crate) fn skip(value: impl Into<String>) -> Self {
        Outcome { verdict: Verdict::Skip, value: value.into() }
    }
}

/// Declared constraints for a text field, supplied by the caller at call time.
///
/// This mirrors how the host application declares constraints on the form
/// element itself (required flag, minlength/maxlength attributes) rather than
/// hard-coding them per field. Validators that need an attribute fail fast
/// with a [`ConfigError`](crate::ConfigError) when it is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAttrs {
    /// Whether the field must be filled in for the record to be complete.
    pub required: bool,
    /// Minimum accepted length, in characters.
    pub minlength: Option<usize>,
    /// Maximum accepted length, in characters.
    pub maxlength: Option<usize>,
}

impl FieldAttrs {
    /// A required field with the given length window.
    pub fn required(minlength: usize, maxlength: usize) -> Self {
        FieldAttrs { required: true, minlength: Some(minlength), maxlength: Some(maxlength) }
    }

    /// An optional field with the given length window.
    pub fn optional(minlength: usize, maxlength: usize) -> Self {
        FieldAttrs { required: false, minlength: Some(minlength), maxlength: Some(maxlength) }
    }
}
