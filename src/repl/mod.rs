//! Line-oriented interactive session.
//!
//! Each line is either a `:` command, a complete formula that is evaluated
//! as a whole, or loose keypad input fed to a [`Keypad`] one key at a time.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions
//! - **parser.rs**: Classification of input lines

pub mod command;
pub mod parser;

pub use command::ReplCommand;
pub use parser::parse_repl_input;

use crate::calculator::{CalcResult, ClipboardError, Evaluator, copy_to_clipboard, format_plain};
use crate::config::{Config, DisplayConfig};
use crate::keypad::{Key, Keypad};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const HELP: &str = "\
Type a formula such as `12 + 7 * 2` to evaluate it, or press keys:
  0-9 .      enter a number
  + - * /    add the number to the formula
  =          evaluate the formula
  c          clear
Commands:
  :c, :clear  clear the keypad
  :y, :copy   copy the last result to the clipboard
  :h, :help   show this help
  :q, :quit   quit";

/// Copies text somewhere, normally the system clipboard.
pub type Copier = fn(&str) -> Result<(), ClipboardError>;

pub struct Session {
    keypad: Keypad,
    display: DisplayConfig,
    last_result: Option<String>,
    copier: Copier,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            keypad: Keypad::new(Evaluator::new(config.zero_division)),
            display: config.display.clone(),
            last_result: None,
            copier: copy_to_clipboard,
        }
    }

    pub fn with_copier(mut self, copier: Copier) -> Self {
        self.copier = copier;
        self
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Clipboard form of the last finite result.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Handle one command and return the line to print, if any.
    /// [`ReplCommand::Quit`] is left to the caller.
    pub fn handle(&mut self, command: ReplCommand) -> Option<String> {
        debug!(?command, "session command");

        match command {
            ReplCommand::Quit | ReplCommand::Empty => None,
            ReplCommand::Help => Some(HELP.to_string()),
            ReplCommand::Clear => {
                self.keypad.clear();
                Some(self.status())
            }
            ReplCommand::Copy => Some(self.copy_last()),
            ReplCommand::Evaluate(text) => Some(self.evaluate(&text)),
            ReplCommand::Keys(keys) => Some(self.press_keys(&keys)),
            ReplCommand::Unknown(input) => Some(format!("unknown command: {input}")),
        }
    }

    fn evaluate(&mut self, text: &str) -> String {
        let outcome = self.keypad.commit_edit(text);
        // Keys typed next continue from the result, not the edited text.
        if outcome.is_ok() {
            self.keypad.clear_formula();
        } else {
            self.keypad.clear();
        }
        let result = CalcResult::from_evaluation(text, outcome, &self.display);

        match result.clipboard() {
            Some(clipboard) => {
                self.last_result = Some(clipboard.to_string());
                format!("= {}", result.display())
            }
            None => format!("error: {}", result.display()),
        }
    }

    fn press_keys(&mut self, keys: &str) -> String {
        for key in keys.chars().filter_map(Key::from_char) {
            match self.keypad.press(key) {
                Ok(Some(value)) if value.is_finite() => {
                    self.last_result = Some(format_plain(value, self.display.max_decimals));
                }
                Ok(_) => {}
                Err(err) => return format!("error: {err}"),
            }
        }
        self.status()
    }

    fn copy_last(&self) -> String {
        let Some(text) = self.last_result.as_deref() else {
            return "nothing to copy".to_string();
        };

        match (self.copier)(text) {
            Ok(()) => format!("copied {text}"),
            Err(err) => format!("error: {err}"),
        }
    }

    /// The keypad as a calculator display would show it.
    fn status(&self) -> String {
        let (formula, input) = (self.keypad.formula(), self.keypad.input());
        if formula.is_empty() && input.is_empty() {
            "0".to_string()
        } else {
            format!("{formula}{input}")
        }
    }
}

/// Read commands from `reader` until end of input or `:quit`, writing one
/// line of output per command.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    reader: R,
    mut writer: W,
) -> io::Result<()> {
    for line in reader.lines() {
        let command = parse_repl_input(&line?);
        if command == ReplCommand::Quit {
            break;
        }
        if let Some(output) = session.handle(command) {
            writeln!(writer, "{output}")?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ZeroDivision;

    fn fake_copy(_: &str) -> Result<(), ClipboardError> {
        Ok(())
    }

    fn run(config: &Config, input: &str) -> Vec<String> {
        let mut session = Session::new(config).with_copier(fake_copy);
        let mut output = Vec::new();
        run_session(&mut session, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_evaluate_formula() {
        assert_eq!(run(&Config::default(), "2 + 3 * 4\n"), vec!["= 14"]);
    }

    #[test]
    fn test_keypad_lines() {
        let lines = run(&Config::default(), "12\n+\n7\n=\n");
        assert_eq!(lines, vec!["12", "12 + ", "12 + 7", "19"]);
    }

    #[test]
    fn test_errors_reported() {
        let lines = run(&Config::default(), "6 / 0\n6/0=\n");
        assert_eq!(
            lines,
            vec!["error: division by zero", "error: division by zero"]
        );
    }

    #[test]
    fn test_nan_policy() {
        let config = Config {
            zero_division: ZeroDivision::Nan,
            ..Config::default()
        };
        assert_eq!(run(&config, "6 / 0\n"), vec!["error: Not a Number"]);
    }

    #[test]
    fn test_quit_stops_reading() {
        let lines = run(&Config::default(), "1+1\n:q\n2+2\n");
        assert_eq!(lines, vec!["= 2"]);
    }

    #[test]
    fn test_copy() {
        let lines = run(&Config::default(), ":copy\n1+1\n:y\n");
        assert_eq!(lines, vec!["nothing to copy", "= 2", "copied 2"]);
    }

    #[test]
    fn test_copy_failure_reported() {
        fn failing_copy(_: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable(arboard::Error::ClipboardNotSupported))
        }

        let mut session = Session::new(&Config::default()).with_copier(failing_copy);
        session.handle(ReplCommand::Evaluate("1+1".to_string()));
        let output = session.handle(ReplCommand::Copy).unwrap();
        assert!(output.starts_with("error: failed to access clipboard"));
    }

    #[test]
    fn test_clear_and_blank_lines() {
        let lines = run(&Config::default(), "1+\n\n:c\n:nope\n");
        assert_eq!(lines, vec!["1 + ", "0", "unknown command: :nope"]);
    }

    #[test]
    fn test_keys_continue_from_formula_result() {
        let lines = run(&Config::default(), "2+3*4\n+1\n=\n");
        assert_eq!(lines, vec!["= 14", "14 + 1", "15"]);
    }

    #[test]
    fn test_keys_after_failed_formula_start_fresh() {
        let lines = run(&Config::default(), "6 / 0\n5\n");
        assert_eq!(lines, vec!["error: division by zero", "5"]);
    }

    #[test]
    fn test_help() {
        let lines = run(&Config::default(), ":h\n");
        assert_eq!(lines.first().map(String::as_str), HELP.lines().next());
    }

    #[test]
    fn test_last_result_tracks_keypad() {
        let mut session = Session::new(&Config::default());
        session.handle(ReplCommand::Keys("1/4=".to_string()));
        assert_eq!(session.last_result(), Some("0.25"));
        assert_eq!(session.keypad().input(), "0.25");
    }
}
