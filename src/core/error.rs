//! Error types for the sphere editor.
//!
//! Uses thiserror for structured errors with context. Errors are split by
//! when they happen:
//! - Errors while loading the input file stop the program
//! - Command errors are reported and the command loop keeps going

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the editor.
#[derive(Error, Debug)]
pub enum SphereError {
    /// The binary was started without a file argument.
    #[error("Usage: {program} <filename>")]
    Usage {
        /// Name the binary was invoked as.
        program: String,
    },

    /// A file could not be read or written.
    #[error("Cannot access file '{}': {source}", .path.display())]
    File {
        /// File that was being read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A file is not valid TOML or does not have the sphere layout.
    #[error("Cannot parse '{}': {source}", .path.display())]
    Parse {
        /// File that was being loaded.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: toml::de::Error,
    },

    /// The graph could not be encoded as TOML.
    #[error("Cannot serialize graph: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A known command had missing or badly shaped arguments.
    #[error("Malformed '{command}' command: {reason}")]
    MalformedCommand {
        /// Command word as typed.
        command: String,
        /// What was wrong with its arguments.
        reason: String,
    },

    /// A sphere id is not a string of decimal digits.
    #[error("Sphere id '{0}' is not a number")]
    InvalidId(String),

    /// Two spheres in a loaded file share an id.
    #[error("Sphere id '{0}' appears more than once")]
    DuplicateId(String),
}

impl SphereError {
    /// Create a malformed command error.
    pub fn malformed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        SphereError::MalformedCommand {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            SphereError::MalformedCommand { command, .. } if command == "add" => {
                Some("Use 'add ID1-ID2', e.g. 'add 3-1'".to_string())
            }
            SphereError::MalformedCommand { command, .. } if command == "write" => {
                Some("Use 'write <outfile>'".to_string())
            }
            SphereError::InvalidId(id) => {
                Some(format!("Rename sphere '{}' to a numeric id", id))
            }
            _ => None,
        }
    }
}

/// Result type alias for editor operations.
pub type SphereResult<T> = Result<T, SphereError>;
