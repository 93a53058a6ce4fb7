//! Releaser (group) name normalization.
//!
//! The archive stores releaser names uppercased and restricted to a small
//! allow-list: `A-Z`, digits, space, hyphen, comma, ampersand, plus the
//! Latin-1 accented capitals (`À-Ö`, `Ø-Þ`). Everything else is stripped.
//! Length limits come from the field's declared attributes, not from here.

use crate::api::{FieldAttrs, Outcome, Verdict};
use crate::error::ConfigError;

/// Normalize a releaser name and judge it against the field's length window.
///
/// The name is uppercased and filtered through the allow-list before the
/// window is applied. For a required field an out-of-window length is always
/// invalid; for an optional field it is only invalid when the normalized name
/// is non-empty (an empty optional field means "unset").
///
/// # Errors
///
/// Fails fast with [`ConfigError`] when the field declares no
/// `minlength`/`maxlength`, or declares them inverted.
pub fn normalize_releaser(raw: &str, attrs: &FieldAttrs) -> Result<Outcome, ConfigError> {
    let min = attrs.minlength.ok_or(ConfigError::MissingConstraint("minlength"))?;
    let max = attrs.maxlength.ok_or(ConfigError::MissingConstraint("maxlength"))?;
    if min > max {
        return Err(ConfigError::InvertedWindow { min, max });
    }

    let upper = raw.to_uppercase();
    let cleaned = regex!(r"[^A-Z0-9 ,&\-À-ÖØ-Þ]").replace_all(&upper, "");
    let len = cleaned.chars().count();

    let in_window = (min..=max).contains(&len);
    let verdict = if in_window || (!attrs.required && len == 0) {
        Verdict::Valid
    } else {
        tracing::debug!(len, min, max, "releaser name outside length window");
        Verdict::Invalid
    };

    Ok(Outcome { verdict, value: cleaned.into_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> FieldAttrs {
        FieldAttrs::required(1, 100)
    }

    #[test]
    fn uppercases_and_strips() {
        let out = normalize_releaser("razor 1911!", &attrs()).unwrap();
        assert_eq!(out.value, "RAZOR 1911");
        assert_eq!(out.verdict, Verdict::Valid);

        let out = normalize_releaser("fairlight & tbl*", &attrs()).unwrap();
        assert_eq!(out.value, "FAIRLIGHT & TBL");
    }

    #[test]
    fn keeps_latin1_accents() {
        let out = normalize_releaser("Fantôme, Ärla", &attrs()).unwrap();
        assert_eq!(out.value, "FANTÔME, ÄRLA");
        assert_eq!(out.verdict, Verdict::Valid);
    }

    #[test]
    fn idempotent() {
        let once = normalize_releaser("Tristar & Red Sector Inc.", &attrs()).unwrap();
        let twice = normalize_releaser(&once.value, &attrs()).unwrap();
        assert_eq!(once.value, twice.value);
    }

    #[test]
    fn required_empty_is_invalid_optional_is_not() {
        let out = normalize_releaser("", &FieldAttrs::required(1, 100)).unwrap();
        assert_eq!(out.verdict, Verdict::Invalid);

        let out = normalize_releaser("", &FieldAttrs::optional(1, 100)).unwrap();
        assert_eq!(out.verdict, Verdict::Valid);
    }

    #[test]
    fn optional_but_nonempty_still_honors_the_window() {
        let out = normalize_releaser("x", &FieldAttrs::optional(2, 100)).unwrap();
        assert_eq!(out.verdict, Verdict::Invalid);
        assert_eq!(out.value, "X");
    }

    #[test]
    fn window_applies_after_stripping() {
        // Raw text is long enough, but nothing survives the allow-list.
        let out = normalize_releaser("???!!!", &FieldAttrs::required(1, 100)).unwrap();
        assert_eq!(out.value, "");
        assert_eq!(out.verdict, Verdict::Invalid);
    }

    #[test]
    fn missing_window_is_a_config_error() {
        let bare = FieldAttrs { required: true, minlength: None, maxlength: Some(10) };
        assert_eq!(normalize_releaser("x", &bare), Err(ConfigError::MissingConstraint("minlength")));

        let bare = FieldAttrs { required: true, minlength: Some(1), maxlength: None };
        assert_eq!(normalize_releaser("x", &bare), Err(ConfigError::MissingConstraint("maxlength")));

        let inverted = FieldAttrs::required(10, 2);
        assert_eq!(normalize_releaser("x", &inverted), Err(ConfigError::InvertedWindow { min: 10, max: 2 }));
    }
}
