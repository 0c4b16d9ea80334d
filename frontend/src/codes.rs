/// Normalizes user-typed game codes before lookup: uppercase, ASCII
/// alphanumerics only. "abc-123!" becomes "ABC123".
pub fn sanitize_game_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_with_punctuation() {
        assert_eq!(sanitize_game_code("abc-123!"), "ABC123");
    }

    #[test]
    fn test_already_clean_code_unchanged() {
        assert_eq!(sanitize_game_code("ABC123"), "ABC123");
    }

    #[test]
    fn test_whitespace_stripped() {
        assert_eq!(sanitize_game_code("  ab c1 23 "), "ABC123");
    }

    #[test]
    fn test_only_punctuation_yields_empty() {
        assert_eq!(sanitize_game_code("-!@#."), "");
    }
}
