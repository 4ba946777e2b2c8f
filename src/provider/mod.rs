pub mod brands;
pub mod solid;

use indexmap::IndexMap;

use crate::error::{RegistryError, Result};
use crate::model::{IconDescriptor, IconStyle};

/// A named set of icon bindings sharing one style family.
///
/// Bindings keep their declaration order, so iterating a provider lists icons
/// the way its module writes them down.
pub struct Provider {
    name: &'static str,
    style: IconStyle,
    bindings: IndexMap<&'static str, &'static IconDescriptor>,
}

impl Provider {
    fn new(
        name: &'static str,
        style: IconStyle,
        icons: &[&'static IconDescriptor],
    ) -> Provider {
        let mut bindings = IndexMap::with_capacity(icons.len());
        for icon in icons {
            debug_assert_eq!(icon.style, style, "binding '{}' in wrong provider", icon.name);
            bindings.insert(icon.name, *icon);
        }
        Provider {
            name,
            style,
            bindings,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    pub fn get(&self, name: &str) -> Option<&'static IconDescriptor> {
        self.bindings.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<&'static IconDescriptor> {
        self.get(name).ok_or_else(|| RegistryError::MissingBinding {
            provider: self.name,
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Resolves a provider named in a manifest.
pub fn by_name(name: &str) -> Option<&'static Provider> {
    match name {
        "solid" => Some(solid::provider()),
        "brands" => Some(brands::provider()),
        _ => None,
    }
}
