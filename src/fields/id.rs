//! Generic bounded integer identifiers.

use crate::error::ConfigError;
use crate::fields::int_value;

/// True iff `text` is empty or an integer in `(0, ceiling]`.
///
/// The ceiling is a sanity bound on how large an identifier the backend could
/// plausibly hold, declared per field by the caller.
///
/// # Errors
///
/// A non-positive ceiling is an integration mistake and fails fast with
/// [`ConfigError::BadCeiling`] rather than resolving to a boolean.
pub fn valid_bounded_id(text: &str, ceiling: i64) -> Result<bool, ConfigError> {
    if ceiling < 1 {
        return Err(ConfigError::BadCeiling(ceiling));
    }
    if text.trim().is_empty() {
        return Ok(true);
    }
    Ok(int_value(text).is_some_and(|n| n > 0 && n <= ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_examples() {
        // (expected, input)
        let cases: Vec<(bool, &str)> = vec![
            (true, ""),
            (true, "1"),
            (true, "5000"),
            (false, "5001"),
            (false, "0"),
            (false, "-3"),
            (false, "12.5"),
            (false, "abc"),
        ];
        for (expected, input) in cases {
            assert_eq!(valid_bounded_id(input, 5000).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn bad_ceiling_fails_fast() {
        assert_eq!(valid_bounded_id("1", 0), Err(ConfigError::BadCeiling(0)));
        assert_eq!(valid_bounded_id("1", -10), Err(ConfigError::BadCeiling(-10)));
        // Even an empty value must not mask the misconfiguration.
        assert_eq!(valid_bounded_id("", 0), Err(ConfigError::BadCeiling(0)));
    }
}
