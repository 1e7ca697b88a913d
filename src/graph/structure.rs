//! Graph structure and edge management.
//!
//! The SphereGraph is the single in-memory model the editor works on. It
//! keeps:
//! - Spheres in file order, indexed by id
//! - Top-level keys other than `spheres`, so they survive a write

use crate::core::error::{SphereError, SphereResult};
use crate::core::types::{NumericId, SphereId};
use crate::graph::sphere::Sphere;
use indexmap::IndexMap;

/// What an `add` changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeChange {
    /// Spheres created because an endpoint was unknown.
    pub created_spheres: usize,
    /// Neighbour entries appended.
    pub added_neighbours: usize,
}

impl EdgeChange {
    /// Check if the graph was left as it was.
    pub fn is_noop(&self) -> bool {
        self.created_spheres == 0 && self.added_neighbours == 0
    }
}

/// The sphere graph.
///
/// Uses IndexMap to keep file order while looking spheres up by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereGraph {
    spheres: IndexMap<SphereId, Sphere>,
    /// Top-level data other than `spheres`.
    pub extra: toml::Table,
}

impl SphereGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from records read from a file.
    ///
    /// Fails if two spheres share an id.
    pub fn from_spheres(spheres: Vec<Sphere>, extra: toml::Table) -> SphereResult<Self> {
        let mut graph = Self {
            spheres: IndexMap::with_capacity(spheres.len()),
            extra,
        };
        for sphere in spheres {
            if graph.spheres.contains_key(&sphere.id) {
                return Err(SphereError::DuplicateId(sphere.id.to_string()));
            }
            graph.spheres.insert(sphere.id.clone(), sphere);
        }
        Ok(graph)
    }

    // ========================================================================
    // Sphere Access
    // ========================================================================

    /// Get a sphere by id.
    pub fn sphere(&self, id: &SphereId) -> Option<&Sphere> {
        self.spheres.get(id)
    }

    /// Check if a sphere exists.
    pub fn contains(&self, id: &SphereId) -> bool {
        self.spheres.contains_key(id)
    }

    /// All spheres in their current order.
    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.spheres.values()
    }

    /// Sphere ids in their current order.
    pub fn sphere_ids(&self) -> impl Iterator<Item = &SphereId> {
        self.spheres.keys()
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the graph has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Append a sphere with default fields unless one with this id exists.
    ///
    /// Returns `true` if a sphere was created.
    pub fn ensure_sphere(&mut self, id: &SphereId) -> bool {
        if self.spheres.contains_key(id) {
            return false;
        }
        self.spheres.insert(id.clone(), Sphere::new(id.clone()));
        true
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Add the symmetric edge `a-b`.
    ///
    /// Missing endpoints are created first, `a` before `b`. Each side gains
    /// the other as a neighbour unless it already lists it, so repeating an
    /// edge changes nothing. A self-edge leaves a single entry.
    pub fn add_edge(&mut self, a: &SphereId, b: &SphereId) -> EdgeChange {
        let mut change = EdgeChange::default();

        for id in [a, b] {
            if self.ensure_sphere(id) {
                change.created_spheres += 1;
            }
        }

        for (from, to) in [(a, b), (b, a)] {
            if let Some(sphere) = self.spheres.get_mut(from) {
                if sphere.add_neighbour(to) {
                    change.added_neighbours += 1;
                }
            }
        }

        change
    }

    /// Check if `a` and `b` list each other.
    pub fn are_adjacent(&self, a: &SphereId, b: &SphereId) -> bool {
        let forward = self.sphere(a).is_some_and(|s| s.has_neighbour(b));
        let backward = self.sphere(b).is_some_and(|s| s.has_neighbour(a));
        forward && backward
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Reorder spheres by the numeric value of their ids, ascending.
    ///
    /// Spheres with equal numeric ids keep their relative order. If any id
    /// is not a number the graph is left unchanged.
    pub fn sort_by_numeric_id(&mut self) -> SphereResult<()> {
        let keys = self
            .spheres
            .keys()
            .map(SphereId::numeric)
            .collect::<SphereResult<Vec<NumericId>>>()?;

        let spheres = std::mem::take(&mut self.spheres);
        let mut entries: Vec<_> = keys.into_iter().zip(spheres).collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        self.spheres = entries.into_iter().map(|(_, entry)| entry).collect();
        Ok(())
    }
}
