//! Hex color helpers.
//!
//! Stops carry their color as a CSS hex literal (`#rrggbb`). Everything that
//! enters the engine from the outside goes through [`normalize_hex`]; colors
//! produced by the random generator are built from [`HEX_DIGITS`] directly.

use crate::error::{Error, Result};

/// Alphabet the random generator draws from.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns true when `s` is `#` followed by exactly six hex digits.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validates a `#rrggbb` literal and lowercases it.
///
/// Surrounding whitespace is ignored.
pub fn normalize_hex(s: &str) -> Result<String> {
    let trimmed = s.trim();
    if is_hex_color(trimmed) {
        Ok(trimmed.to_ascii_lowercase())
    } else {
        Err(Error::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_digit_hex() {
        assert!(is_hex_color("#abcdef"));
        assert!(is_hex_color("#00FF00"));
    }

    #[test]
    fn rejects_other_forms() {
        for bad in ["abcdef", "#abc", "#abcdefa", "#ggg000", "", "#"] {
            assert!(!is_hex_color(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_hex(" #FF00aA ").unwrap(), "#ff00aa");
        assert_eq!(
            normalize_hex("red"),
            Err(Error::InvalidColor("red".to_string()))
        );
    }
}
