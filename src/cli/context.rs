use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::RolodexResult;
use crate::store::Directory;
use crate::validation;

/// Everything a command handler needs: the directory, the contacts file
/// path, and the interactive prompt helpers.
pub struct CliContext {
    pub directory: Directory,
    pub contacts_path: PathBuf,
}

impl CliContext {
    pub fn new(contacts_path: PathBuf) -> Self {
        Self {
            directory: Directory::new(),
            contacts_path,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF. Only the
    /// line terminator is stripped; leading/trailing spaces are kept so
    /// free-text fields arrive exactly as typed.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Re-prompt until the input is email-shaped. Returns None on EOF.
    pub fn prompt_identifier(&self, prompt: &str) -> Option<String> {
        self.prompt_with_rule(prompt, validation::identifier, "identifier")
    }

    /// Re-prompt until the input is a valid phone number. Returns None
    /// on EOF.
    pub fn prompt_phone(&self, prompt: &str) -> Option<String> {
        self.prompt_with_rule(prompt, validation::phone, "phone")
    }

    // There is no retry cap: the loop runs until the rule passes or
    // stdin is exhausted.
    fn prompt_with_rule(
        &self,
        prompt: &str,
        rule: fn(&str, &str) -> RolodexResult<String>,
        field: &str,
    ) -> Option<String> {
        loop {
            let raw = self.read_line(prompt)?;
            match rule(&raw, field) {
                Ok(valid) => return Some(valid),
                Err(_) => println!("Invalid input. Please try again."),
            }
        }
    }
}
