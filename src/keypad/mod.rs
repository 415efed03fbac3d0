//! Keypad-style formula composition.
//!
//! Mirrors a pocket calculator: digits accumulate into the current input,
//! an operator moves the input into the pending formula, and equals evaluates
//! the formula with the last input appended.

use crate::calculator::{CalcError, Evaluator, Operator};
use tracing::debug;

/// A single key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Operator),
    Equals,
    Clear,
}

impl Key {
    /// Map a typed character to a key. Unknown characters map to `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

/// Current input plus the formula composed so far.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    evaluator: Evaluator,
    input: String,
    formula: String,
}

impl Keypad {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            ..Self::default()
        }
    }

    /// The number being typed, or the last result.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The formula composed so far, e.g. `"12 + 7 * "`.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Apply a key press. Returns the value when an equals press evaluated
    /// the formula.
    ///
    /// Only [`Key::Equals`] can fail. On failure the keypad is left exactly
    /// as it was before the press.
    pub fn press(&mut self, key: Key) -> Result<Option<f64>, CalcError> {
        match key {
            Key::Digit(d) if d <= 9 => self.input.push(char::from(b'0' + d)),
            Key::Digit(_) => {}
            Key::Point => self.input.push('.'),
            Key::Operator(op) => {
                if !self.input.is_empty() {
                    self.formula = format!("{}{} {} ", self.formula, self.input, op);
                    self.input.clear();
                }
            }
            Key::Equals => return self.equals(),
            Key::Clear => self.clear(),
        }
        Ok(None)
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.formula.clear();
    }

    /// Drop the pending formula but keep the input, so the next operator
    /// continues from the current number.
    pub fn clear_formula(&mut self) {
        self.formula.clear();
    }

    fn equals(&mut self) -> Result<Option<f64>, CalcError> {
        if self.input.is_empty() || self.formula.is_empty() {
            return Ok(None);
        }

        let formula = format!("{} {}", self.formula, self.input);
        let value = self.evaluator.evaluate_expression(&formula)?;
        debug!(%formula, value, "keypad equals");

        // Full precision, so the result chains exactly into the next formula.
        self.input = value.to_string();
        self.formula.clear();
        Ok(Some(value))
    }

    /// Replace the formula with edited text and evaluate it.
    ///
    /// The edited text stays as the formula. The input shows the result, or
    /// an error marker: `"Error: <message>"` for a division by zero,
    /// `"Error"` for anything else.
    pub fn commit_edit(&mut self, text: &str) -> Result<f64, CalcError> {
        self.formula = text.to_string();

        let outcome = self.evaluator.evaluate_expression(text);
        self.input = match &outcome {
            Ok(value) => value.to_string(),
            Err(err) if err.is_division_by_zero() => format!("Error: {err}"),
            Err(_) => "Error".to_string(),
        };
        outcome
    }
}
