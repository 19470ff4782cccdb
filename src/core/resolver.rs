//! Root aggregation
//!
//! Building happens in two phases:
//! 1. every group is parsed from the document and indexed by name
//! 2. each configuration resolves its group names against that index
//!
//! Because resolution only starts once all groups exist, a configuration may
//! reference a group defined later in the file.

use crate::config::types::RawDocument;
use crate::core::configuration::Configuration;
use crate::core::group::Group;
use crate::core::issues::Issue;
use std::collections::HashMap;
use std::fmt;

/// One configuration as written: a name and the group names it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub group_names: Vec<String>,
}

/// All groups and configurations of one document.
#[derive(Debug, Clone)]
pub struct Root {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
    selections: Vec<Selection>,
    parse_issues: Vec<Issue>,
}

impl Root {
    pub fn build(document: RawDocument) -> Self {
        let mut parse_issues = document.issues;

        let groups: Vec<Group> = document
            .groups
            .iter()
            .map(|(name, body)| Group::parse(name, body.as_ref(), &mut parse_issues))
            .collect();

        let mut index = HashMap::with_capacity(groups.len());
        for (position, group) in groups.iter().enumerate() {
            index.entry(group.name.clone()).or_insert(position);
        }

        let selections = document
            .configurations
            .into_iter()
            .map(|(name, group_names)| Selection { name, group_names })
            .collect();

        Self {
            groups,
            index,
            selections,
            parse_issues,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_with_name(&self, name: &str) -> Option<&Group> {
        self.index.get(name).map(|&position| &self.groups[position])
    }

    fn resolve(&self, selection: &Selection) -> Configuration<'_> {
        let groups = selection
            .group_names
            .iter()
            .map(|name| self.group_with_name(name))
            .collect();
        Configuration::new(selection.name.clone(), selection.group_names.clone(), groups)
    }

    /// Every configuration in document order, bound to its groups.
    pub fn configurations(&self) -> Vec<Configuration<'_>> {
        self.selections.iter().map(|s| self.resolve(s)).collect()
    }

    pub fn configuration(&self, name: &str) -> Option<Configuration<'_>> {
        self.selections
            .iter()
            .find(|s| s.name == name)
            .map(|s| self.resolve(s))
    }

    /// Parse problems followed by dangling group references.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues = self.parse_issues.clone();
        for selection in &self.selections {
            for group in &selection.group_names {
                if self.group_with_name(group).is_none() {
                    issues.push(Issue::DanglingGroup {
                        configuration: selection.name.clone(),
                        group: group.clone(),
                    });
                }
            }
        }
        issues
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Groups: {}, configurations: {}",
            self.groups.len(),
            self.selections.len()
        )
    }
}
