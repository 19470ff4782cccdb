//! Input discovery and loading.

use crate::config::types::{DocumentFile, RawDocument};
use crate::core::issues::Issue;
use crate::core::types::{kind_of, scalar_text};
use crate::error::{BrewgenError, Result};
use crate::project_identity;
use serde_yml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Pick the input file.
///
/// An explicit path must exist. Without one, `brew.yml` and then
/// `brew.yaml` are probed in `dir`.
pub fn resolve_input_path(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(BrewgenError::InputNotFound {
            candidates: vec![path.display().to_string()],
        });
    }

    project_identity::DEFAULT_INPUT_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| BrewgenError::InputNotFound {
            candidates: project_identity::DEFAULT_INPUT_FILES
                .iter()
                .map(|name| dir.join(name).display().to_string())
                .collect(),
        })
}

/// Read and flatten a YAML document from disk.
pub fn load_document(path: &Path) -> Result<RawDocument> {
    let content = fs::read_to_string(path).map_err(|e| BrewgenError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_document(&content).map_err(|e| match e {
        BrewgenError::YamlError(e) => BrewgenError::ParseError {
            file: path.display().to_string(),
            message: e.to_string(),
        },
        other => other,
    })
}

/// Flatten YAML text into a [`RawDocument`].
///
/// Empty input and a `null` document are both an empty document. Merge
/// keys (`<<: *anchor`) are resolved before the groups are read.
pub fn parse_document(content: &str) -> Result<RawDocument> {
    if content.trim().is_empty() {
        return Ok(RawDocument::default());
    }

    let mut value: Value = serde_yml::from_str(content)?;
    value.apply_merge()?;
    let file: Option<DocumentFile> = serde_yml::from_value(value)?;
    let file = file.unwrap_or_default();

    let mut issues = Vec::new();
    let groups = file
        .groups
        .as_ref()
        .map(|groups| read_groups(groups, &mut issues))
        .unwrap_or_default();
    let configurations = file
        .configurations
        .as_ref()
        .map(|configurations| read_configurations(configurations, &mut issues))
        .unwrap_or_default();

    Ok(RawDocument {
        groups,
        configurations,
        issues,
    })
}

fn read_groups(groups: &Mapping, issues: &mut Vec<Issue>) -> Vec<(String, Option<Value>)> {
    groups
        .iter()
        .filter_map(|(key, body)| {
            let Some(name) = scalar_text(key) else {
                issues.push(Issue::MalformedField {
                    context: "groups".to_string(),
                    detail: format!("group name must be a string, got {}", kind_of(key)),
                });
                return None;
            };
            let body = (!body.is_null()).then(|| body.clone());
            Some((name, body))
        })
        .collect()
}

fn read_configurations(
    configurations: &Mapping,
    issues: &mut Vec<Issue>,
) -> Vec<(String, Vec<String>)> {
    configurations
        .iter()
        .filter_map(|(key, value)| {
            let Some(name) = scalar_text(key) else {
                issues.push(Issue::MalformedField {
                    context: "configurations".to_string(),
                    detail: format!("configuration name must be a string, got {}", kind_of(key)),
                });
                return None;
            };
            let group_names = read_group_names(&name, value, issues);
            Some((name, group_names))
        })
        .collect()
}

fn read_group_names(configuration: &str, value: &Value, issues: &mut Vec<Issue>) -> Vec<String> {
    let context = format!("configuration '{}'", configuration);
    match value {
        Value::Null => Vec::new(),
        Value::Sequence(items) => items
            .iter()
            .filter_map(|item| {
                let name = scalar_text(item);
                if name.is_none() {
                    issues.push(Issue::MalformedEntry {
                        context: context.clone(),
                        detail: format!("group reference must be a string, got {}", kind_of(item)),
                    });
                }
                name
            })
            .collect(),
        other => {
            issues.push(Issue::MalformedField {
                context,
                detail: format!("must be a sequence of group names, got {}", kind_of(other)),
            });
            Vec::new()
        }
    }
}
