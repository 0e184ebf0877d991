//! Mapping from typed lines to prompt answers.

use crate::types::MIN_CARD_SIZE;

/// Pick a name from a numbered menu.
///
/// Accepts the 1-based menu number or the exact name.
pub fn select_name<'a>(line: &str, names: &'a [String]) -> Option<&'a str> {
    let line = line.trim();
    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| names.get(i)).map(String::as_str);
    }
    names.iter().find(|n| n.as_str() == line).map(String::as_str)
}

/// Card side length, at least [`MIN_CARD_SIZE`] and small enough that the
/// cell count fits in `usize`.
pub fn parse_size(line: &str) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= MIN_CARD_SIZE && n.checked_mul(n).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["meetings".to_string(), "travel".to_string()]
    }

    #[test]
    fn test_select_by_number_or_name() {
        let names = names();
        assert_eq!(select_name("1", &names), Some("meetings"));
        assert_eq!(select_name(" 2 \n", &names), Some("travel"));
        assert_eq!(select_name("travel", &names), Some("travel"));
    }

    #[test]
    fn test_select_rejects_out_of_menu() {
        let names = names();
        assert_eq!(select_name("0", &names), None);
        assert_eq!(select_name("3", &names), None);
        assert_eq!(select_name("Travel", &names), None);
        assert_eq!(select_name("", &names), None);
    }

    #[test]
    fn test_size() {
        assert_eq!(parse_size("5"), Some(5));
        assert_eq!(parse_size("0"), None);
        assert_eq!(parse_size("five"), None);
        assert_eq!(parse_size(&usize::MAX.to_string()), None);
    }
}
