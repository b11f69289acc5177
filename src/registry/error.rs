use std::fmt;

/// Error types for registry lookups
///
/// Each variant carries the lookup key of the stage that failed so the
/// message on stderr is enough to diagnose which query came up empty.
#[derive(Debug)]
pub enum RegistryError {
    /// No provider matched the name in the hashicorp namespace
    ProviderNotFound { provider: String },

    /// The provider exists but has no version record matching the exact
    /// requested version string
    VersionNotFound { provider: String, version: String },

    /// More than one version record matched the requested version string
    AmbiguousVersion { version: String, count: usize },

    /// No resource doc matched the slug under the resolved version
    DocNotFound {
        resource: String,
        version_id: String,
    },

    /// The response parsed as JSON but not into the expected shape
    MalformedResponse { url: String, detail: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::ProviderNotFound { provider } => {
                write!(f, "Provider not found in registry: '{}'", provider)
            }
            RegistryError::VersionNotFound { provider, version } => {
                write!(
                    f,
                    "Version '{}' not found for provider '{}'",
                    version, provider
                )
            }
            RegistryError::AmbiguousVersion { version, count } => {
                write!(
                    f,
                    "Registry lists {} version records matching '{}'; refusing to pick one",
                    count, version
                )
            }
            RegistryError::DocNotFound {
                resource,
                version_id,
            } => {
                write!(
                    f,
                    "No resource doc for '{}' under provider version id {}",
                    resource, version_id
                )
            }
            RegistryError::MalformedResponse { url, detail } => {
                write!(f, "Unexpected response shape from {}: {}", url, detail)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
