mod error;
mod manifest;
mod model;
pub mod provider;

pub use error::{RegistryError, Result};
pub use manifest::Manifest;
pub use model::{IconCollection, IconDescriptor, IconStyle};
pub use provider::Provider;

use std::sync::LazyLock;
use tracing::debug;

const DEFAULT_MANIFEST: &str = include_str!("../registry.toml");

/// The exported registry: every icon named in the built-in manifest, solid
/// icons first, in listed order. Built once on first access; a broken binding
/// in the shipped manifest aborts initialization.
pub static ICONS: LazyLock<IconCollection> = LazyLock::new(|| {
    default_manifest()
        .and_then(|manifest| assemble(&manifest))
        .unwrap_or_else(|err| {
            tracing::error!(%err, "icon registry failed to initialize");
            panic!("icon registry failed to initialize: {err}");
        })
});

/// The manifest embedded in the crate (`registry.toml`).
pub fn default_manifest() -> Result<Manifest> {
    Manifest::parse(DEFAULT_MANIFEST)
}

/// Resolves every name a manifest enumerates against its provider and appends
/// the resulting references into one ordered collection. Names are taken
/// verbatim: nothing is renamed, filtered, or deduplicated, and a single
/// absent binding fails the whole assembly.
pub fn assemble(manifest: &Manifest) -> Result<IconCollection> {
    let mut icons = Vec::with_capacity(manifest.enumerated());
    for (provider_name, names) in manifest.entries() {
        let provider = provider::by_name(provider_name)
            .ok_or_else(|| RegistryError::UnknownProvider(provider_name.to_string()))?;
        for name in names {
            icons.push(provider.resolve(name)?);
        }
        debug!(
            provider = provider_name,
            count = names.len(),
            "resolved provider bindings"
        );
    }
    Ok(IconCollection::new(icons, manifest.fingerprint()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_parses() {
        let manifest = default_manifest().unwrap();
        assert_eq!(manifest.enumerated(), 12);
    }

    #[test]
    fn unknown_provider_fails_assembly() {
        let manifest = Manifest::parse("[registry]\nduotone = [\"code\"]").unwrap();
        let err = assemble(&manifest).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownProvider(name) if name == "duotone"));
    }

    #[test]
    fn missing_binding_fails_assembly_whole() {
        let manifest =
            Manifest::parse("[registry]\nsolid = [\"code\", \"no-such-icon\"]").unwrap();
        let err = assemble(&manifest).unwrap_err();
        match err {
            RegistryError::MissingBinding { provider, name } => {
                assert_eq!(provider, "solid");
                assert_eq!(name, "no-such-icon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let manifest = Manifest::parse("[registry]\nsolid = [\"code\", \"code\"]").unwrap();
        let collection = assemble(&manifest).unwrap();
        assert_eq!(collection.len(), 2);
        assert!(std::ptr::eq(collection[0], collection[1]));
    }
}
