//! Two-pass evaluation of tokenized formulas.
//!
//! The token sequence is reduced in place: first every `*` and `/` from left
//! to right, then every `+` and `-`. Each reduction replaces an
//! operand/operator/operand triple with the string form of its result, so the
//! sequence shrinks by two per operator until a single literal remains.

use super::error::CalcError;
use super::token::{Operator, Precedence, tokenize};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a division by zero turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    /// Fail with [`CalcError::DivisionByZero`].
    #[default]
    Error,
    /// Return `NaN` as the value of the whole formula, without an error.
    Nan,
}

/// Outcome of a single reduction pass.
#[derive(Debug, PartialEq, Eq)]
enum Pass {
    Complete,
    /// A division by zero cut the pass short. The sequence is left as it was
    /// at that point and must not be read.
    Undefined,
}

/// Formula evaluator. Holds only the division-by-zero policy, so it is cheap
/// to copy and safe to share between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    zero_division: ZeroDivision,
}

impl Evaluator {
    pub fn new(zero_division: ZeroDivision) -> Self {
        Self { zero_division }
    }

    pub fn zero_division(&self) -> ZeroDivision {
        self.zero_division
    }

    /// Tokenize and evaluate a formula.
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, CalcError> {
        let mut tokens = tokenize(expression);
        self.evaluate_tokens(&mut tokens)
    }

    /// Reduce `tokens` to a single value.
    ///
    /// The sequence is expected to alternate literal, operator, literal, but
    /// this is not checked up front. A missing operand is reported as
    /// [`CalcError::InvalidOperatorUsage`] and an operator found in operand
    /// position as [`CalcError::InvalidNumberFormat`], whichever is hit first
    /// while scanning.
    ///
    /// On return `tokens` holds whatever the reduction left behind.
    pub fn evaluate_tokens(&self, tokens: &mut Vec<String>) -> Result<f64, CalcError> {
        for tier in [Precedence::Product, Precedence::Sum] {
            if reduce(tokens, tier)? == Pass::Undefined {
                debug!(?tier, "division by zero, skipping remaining passes");
                return self.undefined();
            }
        }

        let first = tokens.first().ok_or(CalcError::EmptyExpression)?;
        let value = parse_operand(first)?;
        if value.is_nan() {
            return self.undefined();
        }

        Ok(value)
    }

    fn undefined(&self) -> Result<f64, CalcError> {
        match self.zero_division {
            ZeroDivision::Error => Err(CalcError::DivisionByZero),
            ZeroDivision::Nan => Ok(f64::NAN),
        }
    }
}

/// Evaluate a formula with the default policy.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    Evaluator::default().evaluate_expression(expression)
}

/// Evaluate an already tokenized formula with the default policy.
pub fn evaluate_tokens(tokens: &mut Vec<String>) -> Result<f64, CalcError> {
    Evaluator::default().evaluate_tokens(tokens)
}

fn parse_operand(token: &str) -> Result<f64, CalcError> {
    token
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumberFormat(token.to_string()))
}

/// Resolve every operator of `tier`, left to right.
fn reduce(tokens: &mut Vec<String>, tier: Precedence) -> Result<Pass, CalcError> {
    let mut i = 0;

    while i < tokens.len() {
        let Some(op) = Operator::from_token(&tokens[i]).filter(|op| op.precedence() == tier)
        else {
            i += 1;
            continue;
        };

        let missing_operand = || CalcError::InvalidOperatorUsage {
            operator: op.symbol(),
            position: i,
        };

        let left = i.checked_sub(1).ok_or_else(missing_operand)?;
        let lhs = parse_operand(&tokens[left])?;
        let rhs = parse_operand(tokens.get(i + 1).ok_or_else(missing_operand)?)?;

        let Some(value) = op.apply(lhs, rhs) else {
            return Ok(Pass::Undefined);
        };
        debug!(%op, lhs, rhs, value, "reduced");

        // Display for f64 is the shortest string that parses back to the
        // same value, so chaining through text loses no precision.
        tokens[left] = value.to_string();
        tokens.drain(i..i + 2);
        // The result now sits at `i - 1` and the next operator, if any, at
        // `i`, so the cursor stays put.
    }

    Ok(Pass::Complete)
}
