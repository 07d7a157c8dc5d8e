//! Heuristic URI validation
//!
//! QR payloads are noisy, truncated, and produced by many non-standard
//! encoders, so a strict URI grammar would reject far too much. The check
//! here is deliberately crude: one right-to-left pass collecting positional
//! evidence (leftmost '.' and ':'), then a handful of local substring
//! checks. It only needs to know when a string is obviously not a URI.

/// Determine whether a string is not obviously not a URI.
///
/// `None` classifies as false. Otherwise the string is scanned once from
/// the last character to the first; any character at or below the space
/// code point rejects immediately. The '.' and ':' trackers are
/// overwritten on every occurrence, so after the full traversal each holds
/// the leftmost index (scan order makes the final write the one closest to
/// index 0). The boundary conditions downstream depend on exactly that
/// value, so this stays a literal scan rather than a find call.
pub fn is_basically_valid_uri(uri: Option<&str>) -> bool {
    let Some(uri) = uri else {
        return false;
    };
    let chars: Vec<char> = uri.chars().collect();
    let length = chars.len() as isize;
    let mut period: isize = -1;
    let mut colon: isize = -1;
    for i in (0..chars.len()).rev() {
        let c = chars[i];
        if c <= ' ' {
            // covers space, newline, and more
            return false;
        } else if c == '.' {
            period = i as isize;
        } else if c == ':' {
            colon = i as isize;
        }
    }
    // A domain period needs at least a two-char TLD after it, and a URI
    // needs some evidence of protocol or domain structure at all. The -1
    // sentinels make both comparisons come out right for tiny strings.
    if period >= length - 2 || (period <= 0 && colon <= 0) {
        return false;
    }
    if colon >= 0 {
        if period < 0 || period > colon {
            // colon ends the protocol
            if !is_substring_of_alphanumeric(&chars, 0, colon as usize) {
                return false;
            }
        } else {
            // colon starts the port; crudely look for at least two numbers
            if colon >= length - 2 {
                return false;
            }
            if !is_substring_of_digits(&chars, colon as usize + 1, 2) {
                return false;
            }
        }
    }
    true
}

/// Check that `length` chars starting at `offset` are ASCII alphanumeric
fn is_substring_of_alphanumeric(chars: &[char], offset: usize, length: usize) -> bool {
    chars[offset..offset + length]
        .iter()
        .all(|c| c.is_ascii_alphanumeric())
}

/// Check that `length` chars starting at `offset` are ASCII digits
fn is_substring_of_digits(chars: &[char], offset: usize, length: usize) -> bool {
    chars[offset..offset + length].iter().all(|c| c.is_ascii_digit())
}
