//! Line-oriented prompting for the interactive session.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{CoopError, Result};

/// Source of answers to interactive questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show `prompt` and return the line typed in reply, without the newline
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Tell the user something without expecting an answer
    fn notice(&mut self, message: &str);
}

/// Terminal prompter backed by rustyline.
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(CoopError::InputClosed),
            Err(e) => Err(e.into()),
        }
    }

    fn notice(&mut self, message: &str) {
        eprintln!("\x1b[33m{message}\x1b[0m");
    }
}
