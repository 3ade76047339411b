//! Exclusive upper bound for prefix scans.
//!
//! A prefix scan over an ordered store is the half-open range
//! `[prefix, upper_bound_for(prefix))`. Keys are compared by UTF-8 bytes, which
//! orders strings exactly like comparing their `char`s one by one, so bounds
//! are computed on `char`s and stay valid UTF-8.

/// Returns the smallest string greater than every string starting with `prefix`
/// that can be reached by incrementing a single character.
///
/// The last character is replaced by its successor. When the last character is
/// already `char::MAX` it is dropped and the one before it is incremented
/// instead. Returns `None` when no character can be incremented (empty prefix,
/// or a prefix made only of `char::MAX`): the scan is then unbounded above.
///
/// # Examples
///
/// ```
/// use alias_directory::utils::prefix_bound::upper_bound_for;
///
/// assert_eq!(upper_bound_for("ab").as_deref(), Some("ac"));
/// assert_eq!(upper_bound_for(""), None);
/// ```
pub fn upper_bound_for(prefix: &str) -> Option<String> {
    let mut chars: Vec<char> = prefix.chars().collect();

    while let Some(last) = chars.pop() {
        if let Some(next) = successor(last) {
            chars.push(next);
            return Some(chars.into_iter().collect());
        }
    }

    None
}

/// Next Unicode scalar value, skipping the surrogate range.
fn successor(c: char) -> Option<char> {
    match c {
        char::MAX => None,
        '\u{D7FF}' => Some('\u{E000}'),
        _ => char::from_u32(c as u32 + 1),
    }
}
