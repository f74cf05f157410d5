//! Stateless terminal input parser for the dialog.
//!
//! # Example
//!
//! ```
//! use itinera_runtime::dialog::{DialogEvent, DialogInput, DialogInputParser, DialogKey};
//!
//! assert_eq!(DialogInputParser::parse("y"), DialogInput::Event(DialogEvent::Accept));
//! assert_eq!(
//!     DialogInputParser::parse("esc"),
//!     DialogInput::Event(DialogEvent::Key(DialogKey::Escape))
//! );
//! ```

use super::{DialogEvent, DialogKey};

/// A parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogInput {
    /// A dialog interaction.
    Event(DialogEvent),
    /// Leave the prompt. Front ends treat this as a dismissal.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown {
        /// The original input line.
        input: String,
    },
}

/// Converts terminal lines into [`DialogInput`].
pub struct DialogInputParser;

impl DialogInputParser {
    /// Parses one line.
    ///
    /// # Input Format
    ///
    /// | Input | Result |
    /// |-------|--------|
    /// | `y`, `yes`, `ok`, `confirm` | Accept |
    /// | `n`, `no`, `cancel` | Decline |
    /// | `b`, `backdrop`, `outside` | Backdrop click |
    /// | `esc`, `escape`, `enter` | Key press |
    /// | `key <k>` | Key press of `<k>` |
    /// | `q`, `quit`, `exit` | Quit |
    #[must_use]
    pub fn parse(line: &str) -> DialogInput {
        let line = line.trim();
        if line.is_empty() {
            return DialogInput::Empty;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, Some(rest.trim())),
            None => (line, None),
        };

        match (cmd.to_lowercase().as_str(), rest) {
            ("y" | "yes" | "ok" | "confirm", None) => DialogInput::Event(DialogEvent::Accept),
            ("n" | "no" | "cancel", None) => DialogInput::Event(DialogEvent::Decline),
            ("b" | "backdrop" | "outside", None) => DialogInput::Event(DialogEvent::Backdrop),
            ("esc" | "escape", None) => DialogInput::Event(DialogEvent::Key(DialogKey::Escape)),
            ("enter", None) => DialogInput::Event(DialogEvent::Key(DialogKey::Enter)),
            ("key", Some(name)) => match name.parse::<DialogKey>() {
                Ok(key) => DialogInput::Event(DialogEvent::Key(key)),
                Err(_) => DialogInput::Unknown {
                    input: line.to_string(),
                },
            },
            ("q" | "quit" | "exit", None) => DialogInput::Quit,
            _ => DialogInput::Unknown {
                input: line.to_string(),
            },
        }
    }
}
