//! Text measurement helpers.

use unicode_width::UnicodeWidthStr;

/// Terminal display width of `s` in columns.
pub fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Replace every character with `mask`, keeping the character count.
pub fn mask(s: &str, mask: char) -> String {
    s.chars().map(|_| mask).collect()
}

/// Byte offset of the `char_index`-th character, clamped to the end.
pub fn char_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("Canada"), 6);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_char_to_byte_index() {
        assert_eq!(char_to_byte_index("Zoë!", 2), 2);
        assert_eq!(char_to_byte_index("Zoë!", 3), 4);
        assert_eq!(char_to_byte_index("Zoë!", 9), 5);
    }

    #[test]
    fn test_mask_keeps_char_count() {
        assert_eq!(mask("pässword", '•'), "••••••••");
    }
}
