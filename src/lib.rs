//! A minimal four-operator calculator engine.
//!
//! Formulas are split into tokens and reduced in two passes, `*` and `/`
//! before `+` and `-`:
//!
//! ```
//! assert_eq!(tally::evaluate_expression("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(
//!     tally::evaluate_expression("6 / 0"),
//!     Err(tally::CalcError::DivisionByZero)
//! );
//! ```

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod repl;

pub use calculator::{
    CalcError, CalcResult, Evaluator, ZeroDivision, evaluate_expression, evaluate_tokens, tokenize,
};
pub use config::Config;
pub use keypad::{Key, Keypad};
