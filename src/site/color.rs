//! Hex color parsing.

use crate::{Error, Result};

/// Convert a 6-digit hex color string, with or without the leading `#`,
/// into an `(R, G, B)` triple.
///
/// # Examples
///
/// ```
/// assert_eq!(urlsnap::site::hex_to_rgb("#FFAA00").unwrap(), (255, 170, 0));
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // Exactly three 2-character groups; the ASCII check keeps the byte
    // slicing below on character boundaries.
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(Error::InvalidInput(format!("not a 6-digit hex color: {:?}", hex)));
    }

    let group = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| Error::InvalidInput(format!("not a 6-digit hex color: {:?}", hex)))
    };

    Ok((group(0..2)?, group(2..4)?, group(4..6)?))
}
