//! Access-code derivation and validation.
//!
//! A shared conversation link carries a short numeric code derived
//! from the contact's display name. The code is never stored; both
//! sides recompute it from the name and compare exactly.

/// Derive the access code for a display name.
///
/// Looks at the first three character positions of the name, padding
/// missing positions with a blank:
///
/// - ASCII letters map to their alphabet position (`a` = 1 … `z` = 26)
///   and contribute that number's decimal digits — so letters `j`
///   through `z` contribute two characters, and the code is only
///   three characters long when every position lands in `a`–`i` or is
///   a digit;
/// - ASCII digits pass through unchanged;
/// - anything else (including the blank pad) contributes `0`.
///
/// The variable width is intentional and load-bearing: existing links
/// in the wild were generated with exactly this scheme.
pub fn derive_code(name: &str) -> String {
    let mut chars = name.chars();
    let mut code = String::new();

    for _ in 0..3 {
        let ch = chars.next().unwrap_or(' ');
        if ch.is_ascii_alphabetic() {
            let position = (ch.to_ascii_lowercase() as u8 - b'a' + 1) as u32;
            code.push_str(&position.to_string());
        } else if ch.is_ascii_digit() {
            code.push(ch);
        } else {
            code.push('0');
        }
    }

    code
}

/// Check a supplied code against the code derived from `name`.
///
/// Exact string equality; there is no tolerance for leading zeros or
/// whitespace.
pub fn validate_code(name: &str, supplied: &str) -> bool {
    derive_code(name) == supplied
}
