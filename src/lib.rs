//! # Spheres - Interactive Sphere Graph Editor
//!
//! Spheres edits a small TOML file describing "spheres" and the neighbour
//! relationships between them. A file is loaded once, edited through a
//! line-oriented command loop and written back out, optionally to a new
//! path.
//!
//! ## Features
//!
//! - **Symmetric edges**: `add 3-1` records each sphere on the other's neighbour list
//! - **Implicit spheres**: unknown endpoints are created with placeholder values
//! - **Round-trip fidelity**: keys the editor does not understand are written back
//! - **Ordered output**: spheres are sorted by numeric id on write
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spheres::prelude::*;
//!
//! let mut editor = Editor::new(SphereGraph::load("spheres.toml")?);
//! editor.handle_line("add 3-1")?;
//! editor.handle_line("write out.toml")?;
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: identifiers, value types and errors
//! - [`graph`]: the sphere model and its TOML serialization
//! - [`editor`]: command parsing and the read-eval-print loop
//! - [`cli`]: argument handling for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod core;
pub mod editor;
pub mod graph;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use spheres::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{Angle, NumericId, SphereId, UNASSIGNED};

    // Errors
    pub use crate::core::error::{SphereError, SphereResult};

    // Graph
    pub use crate::graph::serialization::SerializedGraph;
    pub use crate::graph::sphere::{Neighbour, Sphere};
    pub use crate::graph::structure::{EdgeChange, SphereGraph};

    // Editor
    pub use crate::editor::command::{Command, CommandKind, CommandTable};
    pub use crate::editor::options::EditorOptions;
    pub use crate::editor::session::{Editor, Response};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
