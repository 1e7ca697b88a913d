//! Graph module for the sphere model.
//!
//! A sphere graph is an undirected graph: every edge is stored twice, as a
//! neighbour entry on each of its endpoints.

pub mod sphere;
pub mod structure;
pub mod serialization;

// Re-export commonly used types
pub use sphere::{Neighbour, Sphere};
pub use structure::{EdgeChange, SphereGraph};
pub use serialization::SerializedGraph;
