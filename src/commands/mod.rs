pub mod check;
pub mod completions;
pub mod generate;

use crate::config::loader;
use crate::core::resolver::Root;
use crate::error::{BrewgenError, Result};
use crate::ui as output;
use std::path::{Path, PathBuf};

/// Find, read and build the document.
pub(crate) fn load_root(file: Option<&Path>, working_dir: &Path) -> Result<(PathBuf, Root)> {
    let path = loader::resolve_input_path(file, working_dir)?;
    output::verbose(&format!("Reading {}", path.display()));

    let document = loader::load_document(&path)?;
    let root = Root::build(document);
    output::verbose(&root.to_string());
    Ok((path, root))
}

/// Lenient mode only shows issues with `--verbose`; strict mode fails.
pub(crate) fn enforce_issues(root: &Root, strict: bool) -> Result<()> {
    let issues = root.issues();
    if issues.is_empty() {
        return Ok(());
    }

    if strict {
        return Err(BrewgenError::StrictViolation(
            issues.iter().map(ToString::to_string).collect(),
        ));
    }

    if output::is_verbose() {
        for issue in &issues {
            output::warning(&issue.to_string());
        }
    }
    Ok(())
}
