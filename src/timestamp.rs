use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimestampError;

// @module: Timestamp encoding and decoding

// @const: Caption timestamp regex (HH:MM:SS with . or , before fractions)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})[.,](\d+)$").unwrap()
});

/// Parse a caption timestamp into seconds.
///
/// Accepts `HH:MM:SS` followed by either `.` or `,` and one or more
/// fractional digits. The fractional field is appended to the integer
/// second count as text and the whole string is read as one decimal
/// number, so `"00:00:01,5"` and `"00:00:01,500"` both decode to `1.5`
/// and `"00:01:00,050"` decodes to `60.05`. Established players decode
/// fractions this way regardless of digit count; do not replace this
/// with a divide-by-power-of-ten keyed to the field width.
pub fn parse_timestamp(text: &str) -> Result<f64, TimestampError> {
    let trimmed = text.trim();
    let caps = TIMESTAMP_REGEX
        .captures(trimmed)
        .ok_or_else(|| TimestampError::Malformed(text.to_string()))?;

    let hours: u64 = caps.get(1).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let minutes: u64 = caps.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let seconds: u64 = caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let fraction = caps.get(4).map_or("0", |m| m.as_str());

    let whole = hours * 3600 + minutes * 60 + seconds;
    format!("{}.{}", whole, fraction)
        .parse::<f64>()
        .map_err(|_| TimestampError::Malformed(text.to_string()))
}

/// Format a seconds value as a caption timestamp (`HH:MM:SS.mmm`).
///
/// Non-finite and negative values clamp to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let clamped = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let total_ms = (clamped * 1000.0).round() as u64;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}
