//! Core types for the sphere editor.
//!
//! This module contains the foundational pieces shared by the graph model
//! and the command loop:
//! - Identifier and value types (`SphereId`, `Angle`)
//! - Error types

pub mod types;
pub mod error;

// Re-export commonly used types
pub use types::{Angle, NumericId, SphereId, UNASSIGNED};
pub use error::{SphereError, SphereResult};
