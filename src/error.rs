use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Failures during registry assembly. All of them are fatal: the registry is
/// either assembled whole or not at all.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("provider '{provider}' has no icon binding named '{name}'")]
    MissingBinding {
        provider: &'static str,
        name: String,
    },

    #[error("unknown icon provider '{0}'")]
    UnknownProvider(String),

    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_binding() {
        let err = RegistryError::MissingBinding {
            provider: "solid",
            name: "no-such-icon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "provider 'solid' has no icon binding named 'no-such-icon'"
        );
    }

    #[test]
    fn display_names_the_provider() {
        let err = RegistryError::UnknownProvider("duotone".to_string());
        assert!(err.to_string().contains("duotone"));
    }
}
