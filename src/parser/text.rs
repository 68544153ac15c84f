//! Text normalization shared by both extractors

use regex::Regex;
use std::sync::LazyLock;

/// Separators between list items inside a pros/cons run
const ITEM_SEPARATORS: [char; 4] = [',', '，', '、', '\n'];

static LEADING_BULLET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•·]+|\d+(?:[、)）]|\.(?:\s|$)))\s*").ok());

/// Unify line endings so `^`/`$` and line splits behave the same for CRLF input
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Trimmed, non-empty lines in input order
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Split a labeled run into trimmed items, dropping empties
pub fn split_items(run: &str) -> Vec<String> {
    run.split(&ITEM_SEPARATORS[..])
        .map(strip_bullet)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// First capture group of a lazily compiled pattern, if it matches
pub fn first_capture<'t>(re: &Option<Regex>, text: &'t str) -> Option<&'t str> {
    re.as_ref()?.captures(text)?.get(1).map(|m| m.as_str())
}

pub fn is_match(re: &Option<Regex>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}

/// Remove a leading list marker such as `-`, `•` or `1.`
pub fn strip_bullet(item: &str) -> &str {
    let item = item.trim();
    match LEADING_BULLET.as_ref().and_then(|re| re.find(item)) {
        Some(m) => item[m.end()..].trim(),
        None => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_non_empty_lines() {
        let lines = non_empty_lines("  first  \n\n \t\nsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_split_items_mixed_separators() {
        let items = split_items("空气好，风景佳, 成本低、安静\n人少");
        assert_eq!(items, vec!["空气好", "风景佳", "成本低", "安静", "人少"]);
    }

    #[test]
    fn test_split_items_drops_empty_and_bullets() {
        let items = split_items("- 便宜\n\n• 近，，\n2. 方便");
        assert_eq!(items, vec!["便宜", "近", "方便"]);
    }

    #[test]
    fn test_strip_bullet_keeps_plain_numbers() {
        assert_eq!(strip_bullet("30分钟"), "30分钟");
        assert_eq!(strip_bullet("1、门票贵"), "门票贵");
        assert_eq!(strip_bullet("3.5公里"), "3.5公里");
    }
}
