//! Configurations: named selections of groups, one manifest each.

use crate::core::group::{Group, Privileged};
use crate::core::package_set::PackageSet;
use crate::project_identity;
use std::fmt;

/// A configuration bound to the groups it references.
///
/// `groups` is parallel to `group_names`; a name with no matching group
/// resolves to `None` and contributes nothing.
#[derive(Debug, Clone)]
pub struct Configuration<'a> {
    pub name: String,
    pub group_names: Vec<String>,
    pub groups: Vec<Option<&'a Group>>,
}

impl<'a> Configuration<'a> {
    pub fn new(name: String, group_names: Vec<String>, groups: Vec<Option<&'a Group>>) -> Self {
        Self {
            name,
            group_names,
            groups,
        }
    }

    /// `Brewfile` for `main`, `<name>.Brewfile` otherwise.
    pub fn file_name(&self) -> String {
        project_identity::manifest_file_name(&self.name)
    }

    /// Referenced names that did not resolve.
    pub fn dangling_groups(&self) -> impl Iterator<Item = &str> {
        self.group_names
            .iter()
            .zip(&self.groups)
            .filter(|(_, group)| group.is_none())
            .map(|(name, _)| name.as_str())
    }

    fn resolved(&self) -> impl Iterator<Item = &'a Group> + '_ {
        self.groups.iter().flatten().copied()
    }

    fn collect(&self, field: impl Fn(&'a Group) -> &'a PackageSet) -> PackageSet {
        self.resolved()
            .flat_map(|group| field(group).iter().cloned())
            .collect()
    }

    fn collect_privileged(&self, field: impl Fn(&'a Privileged) -> &'a PackageSet) -> PackageSet {
        self.resolved()
            .filter_map(|group| group.privileged.as_ref())
            .flat_map(|privileged| field(privileged).iter().cloned())
            .collect()
    }

    pub fn taps(&self) -> PackageSet {
        self.collect(|g| &g.taps)
    }

    pub fn brews(&self) -> PackageSet {
        self.collect(|g| &g.brews)
    }

    pub fn casks(&self) -> PackageSet {
        self.collect(|g| &g.casks)
    }

    pub fn mas_apps(&self) -> PackageSet {
        self.collect(|g| &g.mas_apps)
    }

    pub fn privileged_brews(&self) -> PackageSet {
        self.collect_privileged(|p| &p.brews)
    }

    pub fn privileged_casks(&self) -> PackageSet {
        self.collect_privileged(|p| &p.casks)
    }

    pub fn privileged_mas_apps(&self) -> PackageSet {
        self.collect_privileged(|p| &p.mas_apps)
    }
}

impl fmt::Display for Configuration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Configuration: {}, groups: {}",
            self.name,
            self.group_names.len()
        )
    }
}

#[cfg(test)]
mod tests;
