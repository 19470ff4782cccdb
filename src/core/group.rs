//! Groups and their privileged subsets.

use crate::core::issues::Issue;
use crate::core::package_set::PackageSet;
use crate::core::types::{PackageEntry, kind_of};
use serde_yml::{Mapping, Value};
use std::fmt;

/// Packages that need elevated permissions to install.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Privileged {
    pub brews: PackageSet,
    pub casks: PackageSet,
    pub mas_apps: PackageSet,
}

/// Named, reusable bundle of packages.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub taps: PackageSet,
    /// `None` unless the body has a non-empty `privileged` mapping
    pub privileged: Option<Privileged>,
    pub brews: PackageSet,
    pub casks: PackageSet,
    pub mas_apps: PackageSet,
}

impl Privileged {
    fn parse(body: &Mapping, context: &str, issues: &mut Vec<Issue>) -> Self {
        Self {
            brews: read_entries(body, "brews", context, issues),
            casks: read_entries(body, "casks", context, issues),
            mas_apps: read_entries(body, "mas_apps", context, issues),
        }
    }
}

impl Group {
    /// A group with no packages at all.
    pub fn empty<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            taps: PackageSet::default(),
            privileged: None,
            brews: PackageSet::default(),
            casks: PackageSet::default(),
            mas_apps: PackageSet::default(),
        }
    }

    /// Build a group from one `name: body` pair under `groups`.
    ///
    /// A missing or null body gives an empty group. Shape problems are
    /// pushed onto `issues` and the offending part is left empty.
    pub fn parse(name: &str, body: Option<&Value>, issues: &mut Vec<Issue>) -> Self {
        let mut group = Self::empty(name);
        let context = format!("group '{}'", name);

        let body = match body {
            None | Some(Value::Null) => return group,
            Some(Value::Mapping(map)) => map,
            Some(other) => {
                issues.push(Issue::MalformedField {
                    context,
                    detail: format!("body must be a mapping, got {}", kind_of(other)),
                });
                return group;
            }
        };

        group.taps = read_entries(body, "taps", &context, issues);
        group.privileged = read_privileged(body, &context, issues);
        group.brews = read_entries(body, "brews", &context, issues);
        group.casks = read_entries(body, "casks", &context, issues);
        group.mas_apps = read_entries(body, "mas_apps", &context, issues);
        group
    }
}

fn read_privileged(body: &Mapping, context: &str, issues: &mut Vec<Issue>) -> Option<Privileged> {
    let context = format!("{} privileged", context);
    match body.get("privileged") {
        None | Some(Value::Null) => None,
        Some(Value::Mapping(map)) if map.is_empty() => None,
        Some(Value::Mapping(map)) => Some(Privileged::parse(map, &context, issues)),
        Some(value) if is_falsy(value) => None,
        Some(other) => {
            issues.push(Issue::MalformedField {
                context,
                detail: format!("must be a mapping, got {}", kind_of(other)),
            });
            None
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        _ => false,
    }
}

fn read_entries(body: &Mapping, field: &str, context: &str, issues: &mut Vec<Issue>) -> PackageSet {
    let context = format!("{} {}", context, field);
    let items = match body.get(field) {
        None | Some(Value::Null) => return PackageSet::default(),
        Some(Value::Sequence(items)) => items,
        Some(other) => {
            issues.push(Issue::MalformedField {
                context,
                detail: format!("must be a sequence, got {}", kind_of(other)),
            });
            return PackageSet::default();
        }
    };

    let entries: Vec<PackageEntry> = items.iter().map(PackageEntry::from_value).collect();
    for entry in &entries {
        match entry {
            PackageEntry::Malformed { detail } => issues.push(Issue::MalformedEntry {
                context: context.clone(),
                detail: detail.clone(),
            }),
            PackageEntry::Parameterized { name, .. } => {
                for option in entry.unsupported_options() {
                    issues.push(Issue::UnsupportedOption {
                        context: context.clone(),
                        package: name.clone(),
                        option: option.to_string(),
                    });
                }
            }
            PackageEntry::Name(_) => {}
        }
    }
    PackageSet::new(entries)
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group: {}, taps: {}, brews: {}, casks: {}, mas: {}",
            self.name,
            self.taps.len(),
            self.brews.len(),
            self.casks.len(),
            self.mas_apps.len()
        )?;
        if let Some(privileged) = &self.privileged {
            write!(f, " ({})", privileged)?;
        }
        Ok(())
    }
}

impl fmt::Display for Privileged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Privileged: brews: {}, casks: {}, mas: {}",
            self.brews.len(),
            self.casks.len(),
            self.mas_apps.len()
        )
    }
}

#[cfg(test)]
mod tests;
