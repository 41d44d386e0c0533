//! crates.io registry client
//!
//! Provides production (Live) and test (Mock) implementations of the
//! dependency endpoint consumer. The live client goes through
//! [`NetworkingManager`] for caching and rate limiting; the traversal-facing
//! [`fetch_or_empty`] boundary guarantees that registry failures never
//! propagate past this module.

use crate::networking::{NetworkingManager, NetworkingError};
use crate::primitives::{DepKind, PackageRef};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

/// Registry API errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Network error: {source}")]
    NetworkError {
        #[from]
        source: NetworkingError,
    },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("No dependency listing for {name}@{version}")]
    NotFound { name: String, version: String },
}

/// One dependency row from the registry's dependency endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDependency {
    /// Name of the depended-on package
    pub crate_id: String,
    /// Raw version requirement, e.g. `^1.2` or `>=1.0,<2.0`
    pub req: String,
    /// Relationship kind; registry may omit it
    #[serde(default)]
    pub kind: DepKind,
}

impl RegistryDependency {
    /// Create a normal-kind dependency row
    pub fn new(crate_id: impl Into<String>, req: impl Into<String>) -> Self {
        Self {
            crate_id: crate_id.into(),
            req: req.into(),
            kind: DepKind::Normal,
        }
    }

    /// Override the dependency kind
    pub fn with_kind(mut self, kind: DepKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Response body of `GET /crates/{name}/{version}/dependencies`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyListing {
    pub dependencies: Vec<RegistryDependency>,
}

/// Trait for registry dependency lookups
pub trait RegistryClient {
    /// Fetch the declared dependencies of one (package, version) pair
    ///
    /// The returned listing preserves registry order.
    fn fetch_dependencies(
        &self,
        name: &str,
        version: &str,
    ) -> impl std::future::Future<Output = Result<DependencyListing, RegistryError>> + Send;
}

/// Traversal-facing fetch boundary: failures become empty listings
///
/// Every transport, protocol, or decoding error is logged and swallowed
/// here, turning the affected node into a leaf. Traversals never see a
/// registry error.
pub async fn fetch_or_empty<C: RegistryClient>(
    client: &C,
    package: &PackageRef,
) -> Vec<RegistryDependency> {
    match client
        .fetch_dependencies(&package.name, &package.version)
        .await
    {
        Ok(listing) => listing.dependencies,
        Err(err) => {
            warn!(package = %package, error = %err, "dependency fetch failed, treating as leaf");
            Vec::new()
        }
    }
}

// Path segments carry user-supplied names and unvalidated version tokens
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Live crates.io API client (production)
pub struct LiveCratesIoClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
}

impl LiveCratesIoClient {
    /// Create a client against the public crates.io API
    pub fn new(networking: Arc<NetworkingManager>) -> Self {
        Self {
            networking,
            base_url: "https://crates.io/api/v1".to_string(),
        }
    }

    /// Create a client with custom base URL (mirrors, tests)
    pub fn with_base_url(networking: Arc<NetworkingManager>, base_url: String) -> Self {
        Self {
            networking,
            base_url,
        }
    }

    fn dependencies_url(&self, name: &str, version: &str) -> String {
        format!(
            "{}/crates/{}/{}/dependencies",
            self.base_url,
            utf8_percent_encode(name, PATH_SEGMENT),
            utf8_percent_encode(version, PATH_SEGMENT),
        )
    }
}

impl RegistryClient for LiveCratesIoClient {
    async fn fetch_dependencies(
        &self,
        name: &str,
        version: &str,
    ) -> Result<DependencyListing, RegistryError> {
        let url = self.dependencies_url(name, version);
        let data = self.networking.get_bytes(&url).await?;
        let listing: DependencyListing = serde_json::from_slice(&data)?;
        Ok(listing)
    }
}

/// Mock registry client (testing)
///
/// Maps (name, version) pairs to canned listings and records every fetch
/// so tests can assert on traversal behavior.
pub struct MockRegistryClient {
    responses: HashMap<(String, String), Result<DependencyListing, String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockRegistryClient {
    /// Create a mock with no canned responses
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add a canned dependency listing
    pub fn with_dependencies(
        mut self,
        name: &str,
        version: &str,
        dependencies: Vec<RegistryDependency>,
    ) -> Self {
        self.responses.insert(
            (name.to_string(), version.to_string()),
            Ok(DependencyListing { dependencies }),
        );
        self
    }

    /// Add a canned failure
    pub fn with_error(mut self, name: &str, version: &str, message: &str) -> Self {
        self.responses.insert(
            (name.to_string(), version.to_string()),
            Err(message.to_string()),
        );
        self
    }

    /// Every (name, version) pair fetched so far, in call order
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }
}

impl RegistryClient for MockRegistryClient {
    async fn fetch_dependencies(
        &self,
        name: &str,
        version: &str,
    ) -> Result<DependencyListing, RegistryError> {
        self.calls
            .lock()
            .await
            .push((name.to_string(), version.to_string()));

        match self.responses.get(&(name.to_string(), version.to_string())) {
            Some(Ok(listing)) => Ok(listing.clone()),
            Some(Err(message)) => Err(RegistryError::NotFound {
                name: message.clone(),
                version: version.to_string(),
            }),
            None => Err(RegistryError::NotFound {
                name: name.to_string(),
                version: version.to_string(),
            }),
        }
    }
}

impl Default for MockRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("crates_io.test.rs");
}
