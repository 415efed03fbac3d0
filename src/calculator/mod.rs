//! Four-operator formula evaluation.
//!
//! This module provides functionality to:
//! - Split a formula into literal and operator tokens
//! - Reduce the tokens to a value, `*` and `/` before `+` and `-`
//! - Turn the outcome into display and clipboard strings
//! - Detect whether a line of input is a complete formula
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod error;
mod evaluation;
mod result;
mod token;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use detection::looks_like_expression;
pub use error::CalcError;
pub use evaluation::{Evaluator, ZeroDivision, evaluate_expression, evaluate_tokens};
pub use result::{CalcResult, format_plain};
pub use token::{Operator, Precedence, tokenize};
