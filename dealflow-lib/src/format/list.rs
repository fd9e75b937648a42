//! Delimited tag lists

const DELIMITER: char = ',';

/// Splits a comma separated value into trimmed tokens.
///
/// Order is preserved exactly as written. Absent or blank input gives an
/// empty list. Empty tokens between two commas are kept so that joining the
/// result with `","` gives back the input; badge renderers skip them.
///
/// # Example
///
/// ```
/// use dealflow_lib::format::split_list;
///
/// assert_eq!(split_list(Some("Lead, Follow")), vec!["Lead", "Follow"]);
/// assert!(split_list(None).is_empty());
/// ```
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        Some(s) if !s.trim().is_empty() => {
            s.split(DELIMITER).map(|token| token.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_order_is_preserved() {
        assert_eq!(split_list(Some("Lead,Follow")), vec!["Lead", "Follow"]);
        assert_eq!(split_list(Some("Follow,Lead")), vec!["Follow", "Lead"]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(split_list(Some("Family Office")), vec!["Family Office"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(split_list(Some("")).is_empty());
        assert!(split_list(Some("   ")).is_empty());
    }

    #[test]
    fn test_inner_empty_tokens_kept() {
        assert_eq!(split_list(Some("a,,b")), vec!["a", "", "b"]);
    }

    proptest! {
        #[test]
        fn split_then_join_round_trips(tokens in prop::collection::vec("[A-Za-z][A-Za-z &]{0,10}[A-Za-z]", 1..6)) {
            let input = tokens.join(",");
            let split = split_list(Some(&input));
            prop_assert_eq!(split.join(","), input);
            prop_assert_eq!(split, tokens);
        }
    }
}
