//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character.
///
/// Used to keep message previews in log lines short.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("Hello there", 5), "Hello");
    }

    #[test]
    fn truncate_short_input_unchanged() {
        assert_eq!(truncate_str("Hi", 80), "Hi");
    }

    #[test]
    fn truncate_backs_off_to_char_boundary() {
        // "é" is two bytes
        assert_eq!(truncate_str("café au lait", 4), "caf");
        assert_eq!(truncate_str("café au lait", 5), "café");
    }
}
