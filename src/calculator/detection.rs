//! Formula detection.
//!
//! Decides whether a line of user input is a complete formula that should be
//! evaluated as a whole, as opposed to loose keypad input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches strings made of formula characters only.
    static ref FORMULA_CHARS: Regex = Regex::new(r"^[\d\s.+\-*/]+$").unwrap();

    /// Matches a literal, an operator and another literal, in that order.
    static ref BINARY_OPERATION: Regex = Regex::new(r"[\d.]\s*[+\-*/]\s*[\d.]").unwrap();
}

/// Check if input looks like a formula.
///
/// Returns `true` if the trimmed input:
/// 1. Is at least two characters long
/// 2. Contains only digits, `.`, whitespace and the four operators
/// 3. Contains at least one binary operation
///
/// Plain numbers and dangling operators such as `12 +` are not formulas.
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.len() < 2 {
        return false;
    }

    FORMULA_CHARS.is_match(trimmed) && BINARY_OPERATION.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers_rejected() {
        assert!(!looks_like_expression("123"));
        assert!(!looks_like_expression("42.5"));
        assert!(!looks_like_expression("  42  "));
        assert!(!looks_like_expression("7"));
    }

    #[test]
    fn test_formulas_accepted() {
        assert!(looks_like_expression("2+2"));
        assert!(looks_like_expression("12 + 7 "));
        assert!(looks_like_expression("10 * 5 - 3"));
        assert!(looks_like_expression("100 / 4"));
        assert!(looks_like_expression(".5*2"));
    }

    #[test]
    fn test_incomplete_input_rejected() {
        assert!(!looks_like_expression("12 +"));
        assert!(!looks_like_expression("+5"));
        assert!(!looks_like_expression("*"));
        assert!(!looks_like_expression("="));
    }

    #[test]
    fn test_foreign_characters_rejected() {
        assert!(!looks_like_expression(""));
        assert!(!looks_like_expression("(2 + 3) * 4"));
        assert!(!looks_like_expression("2^8"));
        assert!(!looks_like_expression("1+2="));
        assert!(!looks_like_expression("hello world"));
    }
}
