use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::error::{RegistryError, Result};

/// Enumerates, per provider and in written order, the icon names the registry
/// consumes. The table itself preserves the order providers are listed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    registry: IndexMap<String, Vec<String>>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Manifest> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Manifest> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RegistryError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Manifest::parse(&content)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.registry
            .iter()
            .map(|(provider, names)| (provider.as_str(), names.as_slice()))
    }

    /// Total number of enumerated names across all providers.
    pub fn enumerated(&self) -> usize {
        self.registry.values().map(Vec::len).sum()
    }

    /// SHA-256 over the canonical serialization; equal manifests fingerprint
    /// identically across loads.
    pub fn fingerprint(&self) -> String {
        let serialized =
            serde_json::to_vec(&self.registry).expect("manifest serializes to JSON");
        hex_digest(&Sha256::digest(&serialized))
    }
}

fn hex_digest(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const MANIFEST: &str = r#"
        [registry]
        solid = ["code", "server"]
        brands = ["linux"]
    "#;

    #[test]
    fn parses_providers_in_written_order() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        let entries: Vec<(&str, &[String])> = manifest.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "solid");
        assert_eq!(entries[0].1, ["code".to_string(), "server".to_string()]);
        assert_eq!(entries[1].0, "brands");
        assert_eq!(manifest.enumerated(), 3);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Manifest::parse("[registry\nsolid = ").unwrap_err();
        assert!(matches!(err, RegistryError::ManifestParse(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = Manifest::parse("[registry]\nsolid = 3").unwrap_err();
        assert!(matches!(err, RegistryError::ManifestParse(_)));
    }

    #[test]
    fn reads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();
        let manifest = Manifest::from_path(file.path()).unwrap();
        assert_eq!(manifest.enumerated(), 3);
    }

    #[test]
    fn missing_path_is_a_read_error() {
        let err = Manifest::from_path("/no/such/manifest.toml").unwrap_err();
        assert!(matches!(err, RegistryError::ManifestRead { .. }));
    }

    #[test]
    fn fingerprint_is_stable_and_order_sensitive() {
        let a = Manifest::parse(MANIFEST).unwrap();
        let b = Manifest::parse(MANIFEST).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let reordered = Manifest::parse(
            "[registry]\nsolid = [\"server\", \"code\"]\nbrands = [\"linux\"]",
        )
        .unwrap();
        assert_ne!(a.fingerprint(), reordered.fingerprint());
    }
}
