//! Package identity
//!
//! The identity key decides both duplicate detection and ordering inside a
//! [`PackageSet`](crate::core::package_set::PackageSet):
//! - plain identifier: the identifier itself
//! - parameterized entry: its single top-level key (the package name)
//! - malformed entry: no key, the entry is filtered out

use crate::core::types::PackageEntry;

pub fn identity_key(entry: &PackageEntry) -> Option<&str> {
    match entry {
        PackageEntry::Name(name) => Some(name.as_str()),
        PackageEntry::Parameterized { name, .. } => Some(name.as_str()),
        PackageEntry::Malformed { .. } => None,
    }
}

#[cfg(test)]
mod tests;
