//! Package identity types shared by the traversals, the graph, and the
//! registry client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package pinned to one concrete version token
///
/// The pair is the node identity everywhere: two fetches for the same
/// (name, version) resolve to the same graph node key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef {
    /// Registry package name
    pub name: String,
    /// Concrete version token (already normalized, not validated)
    pub version: String,
}

impl PackageRef {
    /// Create a new package reference
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Graph node key, always `name@version`
    pub fn key(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Parse a `name@version` node key back into a reference
    ///
    /// Keys without a separator get an empty version. Registry names
    /// cannot contain `@`, so the first separator wins.
    pub fn from_key(key: &str) -> Self {
        match key.split_once('@') {
            Some((name, version)) => Self::new(name, version),
            None => Self::new(key, ""),
        }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Dependency relationship kind as reported by the registry
///
/// Informational only: traversal decisions never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepKind {
    /// Regular dependency
    #[default]
    Normal,
    /// Development-only dependency
    Dev,
    /// Build-script dependency
    Build,
    /// Anything the registry reports that we do not model
    #[serde(other)]
    Other,
}

impl fmt::Display for DepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepKind::Normal => "normal",
            DepKind::Dev => "dev",
            DepKind::Build => "build",
            DepKind::Other => "other",
        };
        f.write_str(s)
    }
}
