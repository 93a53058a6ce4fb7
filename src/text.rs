//! Shared text helpers used across the editor pages.

/// Title-case `text` word by word: first letter uppercased, the rest lowered.
///
/// Words are whitespace-delimited; original spacing is preserved.
pub fn titleize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Parse an uppercase Roman numeral in subtractive notation.
///
/// Returns `None` for empty input or any character outside `IVXLCDM`.
/// Sequencing is not strictly validated ("IIII" parses as 4).
pub fn parse_roman(text: &str) -> Option<u32> {
    fn digit(c: char) -> Option<u32> {
        match c {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    let mut prev: u32 = 0;
    for c in trimmed.chars().rev() {
        let value = digit(c)?;
        if value < prev {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
            prev = value;
        }
    }
    Some(total)
}

const BYTE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with 1024-based units and one decimal place.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", BYTE_UNITS[unit])
}
