use std::ops::Deref;

use super::IconDescriptor;

/// Ordered, immutable sequence of icon references produced by assembly.
///
/// Dereferences to a slice; the fingerprint identifies the manifest the
/// collection was assembled from.
#[derive(Debug, Clone)]
pub struct IconCollection {
    icons: Vec<&'static IconDescriptor>,
    fingerprint: String,
}

impl IconCollection {
    pub(crate) fn new(icons: Vec<&'static IconDescriptor>, fingerprint: String) -> IconCollection {
        IconCollection { icons, fingerprint }
    }

    pub fn as_slice(&self) -> &[&'static IconDescriptor] {
        &self.icons
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl Deref for IconCollection {
    type Target = [&'static IconDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.icons
    }
}

impl<'a> IntoIterator for &'a IconCollection {
    type Item = &'a &'static IconDescriptor;
    type IntoIter = std::slice::Iter<'a, &'static IconDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}
