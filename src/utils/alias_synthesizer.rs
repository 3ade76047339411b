//! Default alias synthesis.
//!
//! When a registration omits the alias, the directory hands out the smallest
//! alias that sorts after the current maximum key. Successive defaults walk the
//! key space like spreadsheet columns: `a`, `b`, ..., `z`, `za`, `zb`, ...

/// First alias handed out by an empty directory.
pub const FIRST_ALIAS: &str = "a";

/// Returns the smallest successor of `current` over the alphabet `a`-`z`.
///
/// The rightmost character below `'z'` is incremented and everything after it
/// is dropped. When no such character exists (all `'z'`, or `current` is
/// empty) an `'a'` is appended instead.
///
/// The result is always strictly greater than `current`. Characters outside
/// the alphabet that sort above `'z'` are treated like `'z'`.
///
/// # Examples
///
/// ```
/// use alias_directory::utils::alias_synthesizer::next_after;
///
/// assert_eq!(next_after("az"), "b");
/// assert_eq!(next_after("zz"), "zza");
/// assert_eq!(next_after(""), "a");
/// ```
pub fn next_after(current: &str) -> String {
    let rightmost = current.char_indices().rev().find(|&(_, c)| c < 'z');

    match rightmost {
        Some((index, c)) => {
            let mut next = String::with_capacity(index + 1);
            next.push_str(&current[..index]);
            // `c < 'z'` implies ASCII, so the successor is a single byte.
            next.push(char::from(c as u8 + 1));
            next
        }
        None => format!("{current}{FIRST_ALIAS}"),
    }
}

/// Default alias for a directory whose greatest key is `maximum`.
pub fn default_alias(maximum: Option<&str>) -> String {
    match maximum {
        Some(key) => next_after(key),
        None => FIRST_ALIAS.to_string(),
    }
}
