pub mod bullet_list;
pub mod ordered_list;

pub use bullet_list::{BulletList, BulletListRule};
pub use ordered_list::{OrderedList, OrderedListRule};

/// Byte length of a `N. ` ordered-list marker, if the line opens with one.
pub(crate) fn ordered_marker_len(line: &str) -> Option<usize> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();

    if digits == 0 {
        return None;
    }

    line[digits..].starts_with(". ").then_some(digits + 2)
}

#[cfg(test)]
mod tests {
    use super::ordered_marker_len;

    #[test]
    fn marker_shapes() {
        assert!(ordered_marker_len("1. item") == Some(3));
        assert!(ordered_marker_len("42. item") == Some(4));
        assert!(ordered_marker_len("1.item").is_none());
        assert!(ordered_marker_len(". item").is_none());
        assert!(ordered_marker_len("a. item").is_none());
    }
}
