//! Value types stored on spheres and neighbours.
//!
//! `space` and `angle` are opaque to the editor: they are carried through
//! unchanged, and only implicitly created records get the `-1` placeholder.

use crate::core::error::{SphereError, SphereResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for `space` and `angle` on records the editor creates itself.
pub const UNASSIGNED: i64 = -1;

/// Identifier of a sphere.
///
/// Stored as the original string so that ids such as `"007"` survive a
/// round-trip; ordering on write uses [`SphereId::numeric`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SphereId(String);

impl SphereId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as written in the file.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, used as the sort key on write.
    ///
    /// Any run of ASCII digits is accepted, with no width limit.
    pub fn numeric(&self) -> SphereResult<NumericId> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SphereError::InvalidId(self.0.clone()));
        }
        let digits = self.0.trim_start_matches('0');
        Ok(NumericId {
            len: digits.len(),
            digits: digits.to_string(),
        })
    }
}

/// Integer value of a digit-only id.
///
/// Leading zeros are dropped, so comparing by length and then by digits
/// orders ids the way the integers they spell would be ordered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericId {
    len: usize,
    digits: String,
}

impl fmt::Display for NumericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&self.digits)
        }
    }
}

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SphereId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SphereId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SphereId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SphereId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Numeric angle attached to a neighbour entry.
///
/// Integers and floats are kept apart so a file written by the editor
/// uses the same number syntax it was read with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Angle {
    /// Whole number of degrees
    Integer(i64),
    /// Fractional value
    Float(f64),
}

impl Angle {
    /// Placeholder angle for neighbours added with `add`.
    pub const fn unassigned() -> Self {
        Angle::Integer(UNASSIGNED)
    }

    /// Get as float.
    pub fn as_f64(&self) -> f64 {
        match self {
            Angle::Integer(v) => *v as f64,
            Angle::Float(v) => *v,
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Integer(v) => write!(f, "{}", v),
            Angle::Float(v) => write!(f, "{}", v),
        }
    }
}
