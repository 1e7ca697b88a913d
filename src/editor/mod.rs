//! The interactive command loop.
//!
//! The editor reads one command per line, applies it to the graph it owns
//! and answers on the output stream:
//! - [`command`]: command words, parsing and the dispatch table
//! - [`session`]: the [`Editor`] and its read-eval-print loop
//! - [`options`]: prompt configuration

pub mod command;
pub mod options;
pub mod session;

// Re-export commonly used types
pub use command::{Command, CommandKind, CommandTable};
pub use options::EditorOptions;
pub use session::{Editor, Response};
