//! Graph serialization for loading and writing sphere files.

use crate::core::error::{SphereError, SphereResult};
use crate::graph::sphere::Sphere;
use crate::graph::structure::SphereGraph;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable representation of a complete sphere file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializedGraph {
    /// All spheres
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    /// Every other top-level key, in file order
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl SerializedGraph {
    /// Serialize to a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Deserialize from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl From<&SphereGraph> for SerializedGraph {
    fn from(graph: &SphereGraph) -> Self {
        Self {
            spheres: graph.spheres().cloned().collect(),
            extra: graph.extra.clone(),
        }
    }
}

impl TryFrom<SerializedGraph> for SphereGraph {
    type Error = SphereError;

    fn try_from(serialized: SerializedGraph) -> SphereResult<Self> {
        SphereGraph::from_spheres(serialized.spheres, serialized.extra)
    }
}

impl SphereGraph {
    /// Load a graph from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SphereResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SphereError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let serialized = SerializedGraph::from_toml(&content).map_err(|source| {
            SphereError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let graph = SphereGraph::try_from(serialized)?;
        info!(
            "Loaded {} sphere(s) from {}",
            graph.sphere_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Render the graph as a TOML document, in its current sphere order.
    pub fn to_toml(&self) -> SphereResult<String> {
        Ok(SerializedGraph::from(self).to_toml()?)
    }

    /// Write the graph to a TOML file, in its current sphere order.
    pub fn save(&self, path: impl AsRef<Path>) -> SphereResult<()> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| SphereError::File {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Wrote {} sphere(s) to {}",
            self.sphere_count(),
            path.display()
        );
        Ok(())
    }
}
