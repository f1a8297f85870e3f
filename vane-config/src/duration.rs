//! Duration strings
//!
//! Accepts `"500ms"`, `"60s"`, `"5min"`, `"1h"`. A bare number is taken as
//! milliseconds.

/// Parse a duration string into milliseconds
pub fn parse_duration_ms(value: &str) -> Option<u32> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    if number.is_empty() {
        return None;
    }
    let number: u64 = number.parse().ok()?;

    let factor: u64 = match unit.trim() {
        "" | "ms" => 1,
        "s" => 1_000,
        "min" => 60_000,
        "h" => 3_600_000,
        _ => return None,
    };

    u32::try_from(number.checked_mul(factor)?).ok()
}
