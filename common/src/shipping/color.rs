//! Box colors arrive as `#rrggbb` from the color picker and are stored as a
//! decimal `R, G, B` triplet.

use tracing::debug;

/// Stored form used when the hex input cannot be read.
pub const FALLBACK_RGB: &str = "255, 255, 255";

/// Converts `#rrggbb` (the `#` is optional, digits in any case) to `"R, G, B"`.
///
/// Anything else falls back to white rather than failing.
pub fn hex_to_rgb(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("{r}, {g}, {b}"),
        None => {
            debug!("unreadable color {hex:?}, storing white");
            FALLBACK_RGB.to_string()
        }
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Reads a stored `"R, G, B"` triplet back into its channels, for rendering swatches.
pub fn parse_rgb_triplet(rgb: &str) -> Option<(u8, u8, u8)> {
    let mut parts = rgb.split(',').map(|p| p.trim().parse::<u8>());
    let triplet = (parts.next()?.ok()?, parts.next()?.ok()?, parts.next()?.ok()?);
    if parts.next().is_some() {
        return None;
    }
    Some(triplet)
}
