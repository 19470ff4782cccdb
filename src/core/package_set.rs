use crate::core::identity::identity_key;
use crate::core::types::PackageEntry;
use std::collections::HashSet;

/// Drop entries without an identity key, keep the first entry seen for each
/// key, then sort ascending by key.
pub fn unique_sort<I>(entries: I) -> Vec<PackageEntry>
where
    I: IntoIterator<Item = PackageEntry>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<PackageEntry> = entries
        .into_iter()
        .filter(|entry| match identity_key(entry) {
            Some(key) => seen.insert(key.to_string()),
            None => false,
        })
        .collect();

    // Every remaining entry has a key.
    unique.sort_by(|a, b| identity_key(a).cmp(&identity_key(b)));
    unique
}

/// Deduplicated package list, sorted by identity key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageSet(Vec<PackageEntry>);

impl PackageSet {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = PackageEntry>,
    {
        Self(unique_sort(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageEntry> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(identity_key)
    }
}

impl FromIterator<PackageEntry> for PackageSet {
    fn from_iter<T: IntoIterator<Item = PackageEntry>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PackageSet {
    type Item = &'a PackageEntry;
    type IntoIter = std::slice::Iter<'a, PackageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
