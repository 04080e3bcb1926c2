use unicode_width::UnicodeWidthChar;

/// Truncates to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Label for an option row, numbered from 1 to match the digit shortcuts.
pub fn option_label(index: usize, option: &str) -> String {
    format!("{}. {}", index + 1, option)
}

pub fn score_line(score: u32, total: usize) -> String {
    format!("Score: {} / {}", score, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        let s = "Exactly twenty!!!!!!";
        assert_eq!(truncate_string(s, 20), s);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        // each CJK char takes two columns
        let result = truncate_string("東京都庁舎", 7);
        assert_eq!(result, "東京...");
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("abcdef", 2), "..");
    }

    #[test]
    fn test_option_label_is_one_based() {
        assert_eq!(option_label(0, "Paris"), "1. Paris");
        assert_eq!(option_label(3, "Madrid"), "4. Madrid");
    }

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(1, 2), "Score: 1 / 2");
    }
}
