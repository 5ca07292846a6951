//! Word counting for the editor status line.

/// Counts maximal runs of non-whitespace characters.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Formats a word count zero-padded to at least two digits.
///
/// # Example
///
/// ```rust
/// use tempotype::display::word_count_label;
///
/// assert_eq!(word_count_label(2), "02");
/// assert_eq!(word_count_label(123), "123");
/// ```
pub fn word_count_label(count: usize) -> String {
    format!("{:02}", count)
}
