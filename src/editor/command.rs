//! Command language of the editor.
//!
//! A line is split on single spaces into a command word and its arguments.
//! Command words are looked up in a [`CommandTable`]; words that are not in
//! the table are ignored by the editor.

use crate::core::error::{SphereError, SphereResult};
use crate::core::types::SphereId;
use indexmap::IndexMap;
use std::path::PathBuf;

/// The kinds of command the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `show`
    Show,
    /// `add ID1-ID2`
    Add,
    /// `write outfile`
    Write,
    /// `help`
    Help,
    /// `exit` or `quit`
    Exit,
}

impl CommandKind {
    /// Usage line shown by `help`.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Show => "show",
            CommandKind::Add => "add ID1-ID2",
            CommandKind::Write => "write outfile",
            CommandKind::Help => "help",
            CommandKind::Exit => "exit",
        }
    }

    /// One-line description shown by `help`.
    pub fn summary(&self) -> &'static str {
        match self {
            CommandKind::Show => "show the current data",
            CommandKind::Add => "add edge between ID1 and ID2",
            CommandKind::Write => "write output to outfile",
            CommandKind::Help => "show this help",
            CommandKind::Exit => "exit",
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every sphere.
    Show,
    /// Add the symmetric edge `a-b`.
    Add { a: SphereId, b: SphereId },
    /// Sort spheres by id and write the graph to `path`.
    Write { path: PathBuf },
    /// Print the usage summary.
    Help,
    /// Leave the command loop.
    Exit,
}

impl Command {
    /// The kind of this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Show => CommandKind::Show,
            Command::Add { .. } => CommandKind::Add,
            Command::Write { .. } => CommandKind::Write,
            Command::Help => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
        }
    }
}

/// Dispatch table from command words to command kinds.
///
/// Several words may map to the same kind (`exit` and `quit`). Help output
/// follows registration order.
#[derive(Debug, Clone)]
pub struct CommandTable {
    words: IndexMap<&'static str, CommandKind>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            words: IndexMap::new(),
        }
    }

    /// Create the table with every built-in command.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.register("show", CommandKind::Show);
        table.register("add", CommandKind::Add);
        table.register("write", CommandKind::Write);
        table.register("help", CommandKind::Help);
        table.register("exit", CommandKind::Exit);
        table.register("quit", CommandKind::Exit);
        table
    }

    /// Map a command word to a kind.
    pub fn register(&mut self, word: &'static str, kind: CommandKind) {
        self.words.insert(word, kind);
    }

    /// Look up a command word.
    pub fn lookup(&self, word: &str) -> Option<CommandKind> {
        self.words.get(word).copied()
    }

    /// Number of registered words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no words are registered.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Parse a trimmed, non-empty line.
    ///
    /// Returns `Ok(None)` for a word that is not in the table. Arguments
    /// beyond the ones a command needs are ignored.
    pub fn parse(&self, line: &str) -> SphereResult<Option<Command>> {
        let mut tokens = line.split(' ');
        let word = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        let kind = match self.lookup(word) {
            Some(kind) => kind,
            None => return Ok(None),
        };

        let command = match kind {
            CommandKind::Show => Command::Show,
            CommandKind::Add => parse_edge(word, args.first().copied())?,
            CommandKind::Write => match args.first() {
                Some(path) if !path.is_empty() => Command::Write {
                    path: PathBuf::from(path),
                },
                _ => return Err(SphereError::malformed(word, "missing output path")),
            },
            CommandKind::Help => Command::Help,
            CommandKind::Exit => Command::Exit,
        };

        Ok(Some(command))
    }

    /// Usage summary listing each distinct command once.
    pub fn help_text(&self) -> String {
        let mut text = String::from("Help:");
        let mut seen = Vec::new();
        for kind in self.words.values() {
            if *kind == CommandKind::Help || seen.contains(kind) {
                continue;
            }
            seen.push(*kind);
            text.push_str(&format!("\n    {:<16}{}", kind.usage(), kind.summary()));
        }
        text
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn parse_edge(word: &str, arg: Option<&str>) -> SphereResult<Command> {
    let arg = match arg {
        Some(arg) if !arg.is_empty() => arg,
        _ => return Err(SphereError::malformed(word, "missing ID1-ID2 argument")),
    };

    let parts: Vec<&str> = arg.split('-').collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok(Command::Add {
            a: SphereId::from(*a),
            b: SphereId::from(*b),
        }),
        _ => Err(SphereError::malformed(
            word,
            format!("expected ID1-ID2, got '{}'", arg),
        )),
    }
}
