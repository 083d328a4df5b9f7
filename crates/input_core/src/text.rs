//! UTF-8 caret helpers for the single-line control.
//!
//! Carets are byte indices; every helper here returns an index that sits on a
//! character boundary of the string it was given.

use std::borrow::Cow;

/// Clamp a byte index into `s`, moving it back onto a character boundary.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "aéb"; // 'é' is 2 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Boundary of the character before `i`, or 0.
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// assert_eq!(prev_cursor_boundary("aéb", 3), 1);
/// assert_eq!(prev_cursor_boundary("aéb", 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Boundary of the character after `i`, or `s.len()`.
///
/// ```
/// use input_core::next_cursor_boundary;
///
/// assert_eq!(next_cursor_boundary("aéb", 1), 3);
/// assert_eq!(next_cursor_boundary("aéb", 4), 4);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Strip CR and LF; a single-line control never stores them.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}
