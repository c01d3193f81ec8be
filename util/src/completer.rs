use rustyline::{Context, Helper, Highlighter, Hinter, Result, Validator, completion::Completer};
use std::collections::BTreeSet;

/// A rustyline completer for `:`-prefixed commands typed at the start of the line.
#[derive(Helper, Highlighter, Hinter, Validator)]
pub struct CommandsCompleter {
    commands: BTreeSet<String>,
}

impl CommandsCompleter {
    pub fn new(commands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        if pos == 0 {
            let all = self.commands.iter().map(|c| format!(":{c}")).collect();
            return (0, all);
        }

        match line[..pos].strip_prefix(':') {
            Some(prefix) if prefix.chars().all(char::is_alphanumeric) => {
                let matching = self
                    .commands
                    .iter()
                    .filter(|c| c.starts_with(prefix))
                    .cloned()
                    .collect();
                (1, matching)
            }
            _ => (pos, Vec::new()),
        }
    }
}

impl Completer for CommandsCompleter {
    type Candidate = String;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context) -> Result<(usize, Vec<String>)> {
        Ok(self.candidates(line, pos))
    }
}
