//! Common utility functions shared across the codebase.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Text without letters (empty, whitespace, punctuation, emoji, numbers)
/// is not sent to the translation service.
///
/// # Examples
///
/// ```
/// use lingo::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic("👋"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Shorten `text` to at most `max_width` terminal columns, ending in `…`.
///
/// Line breaks are shown as `⏎` so that multi-line keys stay on one line.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    let single_line: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { '⏎' } else { c })
        .collect();

    if UnicodeWidthStr::width(single_line.as_str()) <= max_width {
        return single_line;
    }

    let mut out = String::new();
    let mut width = 0;
    for c in single_line.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
