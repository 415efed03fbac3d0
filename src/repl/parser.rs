//! Classification of session input lines.

use super::ReplCommand;
use crate::calculator::looks_like_expression;

/// Parse a line of session input into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit
/// - `:h` or `:help` → Help
/// - `:c` or `:clear` → Clear
/// - `:y` or `:copy` → Copy
/// - a complete formula such as `12 + 7` → Evaluate
/// - anything else → Keys
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Empty;
    }

    if let Some(cmd) = input.strip_prefix(':') {
        return match cmd.trim() {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            "c" | "clear" => ReplCommand::Clear,
            "y" | "copy" => ReplCommand::Copy,
            _ => ReplCommand::Unknown(input.to_string()),
        };
    }

    if looks_like_expression(input) {
        ReplCommand::Evaluate(input.to_string())
    } else {
        ReplCommand::Keys(input.to_string())
    }
}
