//! Delimiter scanning primitives shared by the inline rules.

/// Finds the first occurrence of `pattern` at or after `start`.
///
/// The closing delimiter may sit directly next to the opening one,
/// so empty content between a pair of markers is legal.
pub fn find_closing(chars: &[char], start: usize, pattern: &str) -> Option<usize> {
    let pat: Vec<char> = pattern.chars().collect();

    if pat.is_empty() {
        return None;
    }

    let last = chars.len().checked_sub(pat.len())?;

    (start..=last).find(|&at| chars[at..at + pat.len()] == pat[..])
}

/// Finds the first occurrence of `target` at or after `start`.
pub fn find_char(chars: &[char], start: usize, target: char) -> Option<usize> {
    chars
        .get(start..)?
        .iter()
        .position(|&c| c == target)
        .map(|offset| start + offset)
}

#[cfg(test)]
mod tests {
    use super::{find_char, find_closing};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn closing_marker() {
        let text = chars("**bold**");

        assert!(find_closing(&text, 2, "**") == Some(6));
    }

    #[test]
    fn adjacent_markers_are_legal() {
        let text = chars("****");

        assert!(find_closing(&text, 2, "**") == Some(2));
    }

    #[test]
    fn absent_marker() {
        let text = chars("**bold");

        assert!(find_closing(&text, 2, "**").is_none());
    }

    #[test]
    fn pattern_longer_than_input() {
        let text = chars("*");

        assert!(find_closing(&text, 0, "**").is_none());
    }

    #[test]
    fn start_past_the_end() {
        let text = chars("abc");

        assert!(find_closing(&text, 7, "c").is_none());
        assert!(find_char(&text, 7, 'c').is_none());
    }

    #[test]
    fn char_search() {
        let text = chars("[link]");

        assert!(find_char(&text, 1, ']') == Some(5));
        assert!(find_char(&text, 1, ')').is_none());
    }
}
