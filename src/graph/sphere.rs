//! Sphere and neighbour records.

use crate::core::types::{Angle, SphereId, UNASSIGNED};
use serde::{Deserialize, Serialize};
use std::fmt;

fn unassigned_space() -> i64 {
    UNASSIGNED
}

/// Append `, key: value` for each preserved key.
fn write_extra(f: &mut fmt::Formatter<'_>, extra: &toml::Table) -> fmt::Result {
    for (key, value) in extra {
        write!(f, ", {}: {}", key, value)?;
    }
    Ok(())
}

/// One end of an edge, stored on the sphere at the other end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbour {
    /// Id of the adjacent sphere.
    pub id: SphereId,
    /// Opaque angle value.
    #[serde(default)]
    pub angle: Angle,
    /// Keys the editor does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Neighbour {
    /// Create a neighbour entry with the placeholder angle.
    pub fn new(id: impl Into<SphereId>) -> Self {
        Self {
            id: id.into(),
            angle: Angle::unassigned(),
            extra: toml::Table::new(),
        }
    }

    /// Set the angle.
    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }
}

impl fmt::Display for Neighbour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id: {:?}, angle: {}", self.id.as_str(), self.angle)?;
        write_extra(f, &self.extra)?;
        f.write_str("}")
    }
}

/// A node of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Unique identifier.
    pub id: SphereId,
    /// Opaque space tag.
    #[serde(default = "unassigned_space")]
    pub space: i64,
    /// Adjacent spheres, in insertion order.
    #[serde(default)]
    pub neighbours: Vec<Neighbour>,
    /// Keys the editor does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Sphere {
    /// Create a sphere the way `add` does for an unknown endpoint.
    pub fn new(id: impl Into<SphereId>) -> Self {
        Self {
            id: id.into(),
            space: UNASSIGNED,
            neighbours: Vec::new(),
            extra: toml::Table::new(),
        }
    }

    /// Set the space tag.
    pub fn with_space(mut self, space: i64) -> Self {
        self.space = space;
        self
    }

    /// Add a neighbour entry.
    pub fn with_neighbour(mut self, neighbour: Neighbour) -> Self {
        self.neighbours.push(neighbour);
        self
    }

    /// Check if `id` is already listed as a neighbour.
    pub fn has_neighbour(&self, id: &SphereId) -> bool {
        self.neighbours.iter().any(|n| &n.id == id)
    }

    /// Append `id` as a neighbour unless it is already listed.
    ///
    /// Returns `true` if an entry was added.
    pub fn add_neighbour(&mut self, id: &SphereId) -> bool {
        if self.has_neighbour(id) {
            return false;
        }
        self.neighbours.push(Neighbour::new(id.clone()));
        true
    }

    /// Neighbour ids in order.
    pub fn neighbour_ids(&self) -> impl Iterator<Item = &SphereId> {
        self.neighbours.iter().map(|n| &n.id)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id: {:?}, space: {}, neighbours: [", self.id.as_str(), self.space)?;
        for (i, neighbour) in self.neighbours.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", neighbour)?;
        }
        f.write_str("]")?;
        write_extra(f, &self.extra)?;
        f.write_str("}")
    }
}
