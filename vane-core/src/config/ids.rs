//! Object identifiers
//!
//! Every declared object in the generated program is named by an id.
//! Ids are C identifiers with a bounded length so they fit a fixed
//! capacity string.

use alloc::string::String as AllocString;
use heapless::String;

/// Maximum id length
pub const MAX_ID_LEN: usize = 64;

/// Object identifier
pub type Id = String<MAX_ID_LEN>;

/// Check that `s` is a C identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a user supplied id
///
/// Returns `None` if `s` is not an identifier or exceeds [`MAX_ID_LEN`].
pub fn parse_id(s: &str) -> Option<Id> {
    if !is_identifier(s) {
        return None;
    }
    Id::try_from(s).ok()
}

/// Build an id from parts joined by `_`, truncated to [`MAX_ID_LEN`]
pub fn join_id(parts: &[&str]) -> Id {
    let mut id = Id::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 && id.push('_').is_err() {
            break;
        }
        for c in part.chars() {
            if id.push(c).is_err() {
                return id;
            }
        }
    }
    id
}

/// Convert a class name to snake case
///
/// `PanasonicACSelect` becomes `panasonic_ac_select`.
pub fn snake_case(name: &str) -> AllocString {
    let chars: alloc::vec::Vec<char> = name.chars().collect();
    let mut out = AllocString::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rules() {
        assert!(is_identifier("vane_select"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("has-dash"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_parse_id_length_limit() {
        let long = "a".repeat(MAX_ID_LEN + 1);
        assert!(parse_id(&long).is_none());
        assert_eq!(parse_id("ac").unwrap().as_str(), "ac");
    }

    #[test]
    fn test_join_id_truncates() {
        assert_eq!(join_id(&["ac", "vertical_swing_select"]).as_str(), "ac_vertical_swing_select");

        let long = "b".repeat(MAX_ID_LEN);
        let id = join_id(&["a", &long]);
        assert_eq!(id.len(), MAX_ID_LEN);
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("PanasonicACSelect"), "panasonic_ac_select");
        assert_eq!(snake_case("PanasonicClimate"), "panasonic_climate");
        assert_eq!(snake_case("Select"), "select");
    }
}
