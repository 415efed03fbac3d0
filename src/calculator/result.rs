//! Presentation of evaluation outcomes.
//!
//! Turns the raw `Result<f64, CalcError>` of an evaluation into the strings a
//! front end shows and copies.

use super::error::CalcError;
use crate::config::DisplayConfig;
use serde::Serialize;

/// Result of evaluating a formula, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The original formula.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display_result: String,
        /// Formatted for clipboard (raw number).
        clipboard_result: String,
    },
    /// Evaluation failed, or produced NaN or an infinity.
    Error {
        /// The original formula.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    pub fn from_evaluation(
        expression: &str,
        outcome: Result<f64, CalcError>,
        display: &DisplayConfig,
    ) -> Self {
        let expression = expression.trim().to_string();

        let value = match outcome {
            Ok(value) => value,
            Err(err) => {
                return Self::Error {
                    expression,
                    message: err.to_string(),
                };
            }
        };

        if value.is_nan() {
            Self::Error {
                expression,
                message: "Not a Number".to_string(),
            }
        } else if value.is_infinite() {
            let message = if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            };
            Self::Error {
                expression,
                message: message.to_string(),
            }
        } else {
            Self::Success {
                expression,
                display_result: format_display(value, display),
                clipboard_result: format_plain(value, display.max_decimals),
                value,
            }
        }
    }

    /// Get the formula that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

/// Format a number without grouping: integral values print without a
/// fractional part, others with at most `max_decimals` decimals.
pub fn format_plain(value: f64, max_decimals: usize) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.*}", max_decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        &formatted
    };

    match trimmed {
        "-0" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn format_display(value: f64, display: &DisplayConfig) -> String {
    let plain = format_plain(value, display.max_decimals);
    if display.thousands_separator {
        group_thousands(&plain)
    } else {
        plain
    }
}

/// Insert `,` between groups of three digits in the integer part.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = unsigned.split_at(unsigned.find('.').unwrap_or(unsigned.len()));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped() -> DisplayConfig {
        DisplayConfig {
            thousands_separator: true,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_integral_result() {
        let result = CalcResult::from_evaluation("2 + 2", Ok(4.0), &DisplayConfig::default());
        assert!(result.is_success());
        assert_eq!(result.display(), "4");
        assert_eq!(result.clipboard(), Some("4"));
        assert_eq!(result.value(), Some(4.0));
    }

    #[test]
    fn test_thousand_separators() {
        let result = CalcResult::from_evaluation("1000 * 1000", Ok(1_000_000.0), &grouped());
        assert_eq!(result.display(), "1,000,000");
        assert_eq!(result.clipboard(), Some("1000000"));

        let result = CalcResult::from_evaluation("x", Ok(-1234.5), &grouped());
        assert_eq!(result.display(), "-1,234.5");

        let result = CalcResult::from_evaluation("x", Ok(-0.5), &grouped());
        assert_eq!(result.display(), "-0.5");

        let result = CalcResult::from_evaluation("x", Ok(999.0), &grouped());
        assert_eq!(result.display(), "999");
    }

    #[test]
    fn test_decimal_result() {
        let result = CalcResult::from_evaluation("1 / 3", Ok(1.0 / 3.0), &DisplayConfig::default());
        assert_eq!(result.display(), "0.3333333333");
        let result =
            CalcResult::from_evaluation("0.1+0.2", Ok(0.1 + 0.2), &DisplayConfig::default());
        assert_eq!(result.display(), "0.3");
    }

    #[test]
    fn test_max_decimals() {
        assert_eq!(format_plain(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_plain(2.4, 0), "2");
        assert_eq!(format_plain(1e20, 3), "100000000000000000000");
        assert_eq!(format_plain(-1e-12, 10), "0");
        assert_eq!(format_plain(-0.4, 0), "0");
        assert_eq!(format_plain(-2.4, 0), "-2");
    }

    #[test]
    fn test_errors() {
        let result = CalcResult::from_evaluation(
            " 6 / 0 ",
            Err(CalcError::DivisionByZero),
            &DisplayConfig::default(),
        );
        assert!(!result.is_success());
        assert_eq!(result.expression(), "6 / 0");
        assert_eq!(result.display(), "division by zero");
        assert_eq!(result.clipboard(), None);
    }

    #[test]
    fn test_non_finite_values() {
        let display = DisplayConfig::default();
        let nan = CalcResult::from_evaluation("6/0", Ok(f64::NAN), &display);
        assert_eq!(nan.display(), "Not a Number");
        let inf = CalcResult::from_evaluation("x", Ok(f64::INFINITY), &display);
        assert_eq!(inf.display(), "Infinity");
        let neg = CalcResult::from_evaluation("x", Ok(f64::NEG_INFINITY), &display);
        assert_eq!(neg.display(), "-Infinity");
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let result = CalcResult::from_evaluation("2+2", Ok(4.0), &DisplayConfig::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["value"], 4.0);
        assert_eq!(json["display_result"], "4");

        let result = CalcResult::from_evaluation(
            "abc",
            Err(CalcError::EmptyExpression),
            &DisplayConfig::default(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "empty expression");
    }
}
