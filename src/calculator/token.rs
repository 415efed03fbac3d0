//! Tokenization of plain-text formulas.
//!
//! Tokens are kept as strings: a numeric literal's text, or a single operator
//! symbol. [`Operator::from_token`] is the membership test that tells the two
//! apart.

use std::fmt;

/// Precedence tier of an operator. Higher tiers are reduced first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `+` and `-`.
    Sum,
    /// `*` and `/`.
    Product,
}

/// One of the four supported arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol this operator is written with.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Subtract => Precedence::Sum,
            Self::Multiply | Self::Divide => Precedence::Product,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Classify a token. Only a token consisting of exactly one operator
    /// symbol is an operator, so a negative intermediate result such as `-3`
    /// stays a number.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Apply the operator. Returns `None` for a division whose divisor is
    /// exactly zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Split a formula into numeric literals and operator symbols.
///
/// Characters that are neither digits, `.`, nor an operator are dropped
/// without ending the literal being accumulated, so `"1 2"` yields `["12"]`.
/// Literals are not validated here; `"1.2.3"` comes through as one token and
/// fails later when the evaluator parses it.
pub fn tokenize(expression: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for c in expression.chars() {
        if is_literal_char(c) {
            literal.push(c);
        } else if let Some(op) = Operator::from_char(c) {
            if !literal.is_empty() {
                tokens.push(std::mem::take(&mut literal));
            }
            tokens.push(op.symbol().to_string());
        }
    }

    if !literal.is_empty() {
        tokens.push(literal);
    }

    tokens
}
