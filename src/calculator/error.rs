//! Errors produced while evaluating a formula.

use thiserror::Error;

/// Reasons an evaluation can fail. None of them carries a partial result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A token in operand position is not a number, e.g. `1.2.3` or an
    /// operator sitting where an operand belongs.
    #[error("invalid number format: {0:?}")]
    InvalidNumberFormat(String),

    /// An operator is missing its left or right operand.
    #[error("invalid operator usage: `{operator}` at position {position} is missing an operand")]
    InvalidOperatorUsage { operator: char, position: usize },

    /// Division by exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Nothing in the formula could be evaluated.
    #[error("empty expression")]
    EmptyExpression,
}

impl CalcError {
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
