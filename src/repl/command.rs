//! Commands understood by the interactive session.

/// Commands that can be parsed from a line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Leave the session
    Quit,

    /// Show help information
    Help,

    /// Reset the keypad
    Clear,

    /// Copy the last result to the clipboard
    Copy,

    /// Evaluate a complete formula
    Evaluate(String),

    /// Feed characters to the keypad one by one
    Keys(String),

    /// Blank line
    Empty,

    /// Unknown `:` command
    Unknown(String),
}
