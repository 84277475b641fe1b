//! Deterministic post-processing of validated answers

/// Normalize a whitespace-delimited name to title case
///
/// Splits on whitespace, drops empty tokens, upper-cases the first
/// character of each token and lower-cases the rest, then joins with
/// single spaces. Models capitalize inconsistently; this makes the output
/// stable.
///
/// The transform is pure and idempotent:
/// `normalize_name(normalize_name(x)) == normalize_name(x)`.
///
/// # Examples
///
/// ```
/// use plinth_extractor::normalize_name;
///
/// assert_eq!(normalize_name("jane DOE"), "Jane Doe");
/// ```
pub fn normalize_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_mixed_case() {
        assert_eq!(normalize_name("jane DOE"), "Jane Doe");
    }

    #[test]
    fn test_normalize_already_normalized() {
        assert_eq!(normalize_name("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_name("  jane \t doe \n"), "Jane Doe");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_normalize_single_characters() {
        assert_eq!(normalize_name("j r r tolkien"), "J R R Tolkien");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[a-zA-Z0-9 \\t]{0,64}") {
            let once = normalize_name(&s);
            let twice = normalize_name(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
