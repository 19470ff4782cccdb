use crate::core::resolver::Root;
use crate::error::Result;
use crate::render;
use crate::ui as output;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub file: Option<PathBuf>,
    pub working_dir: PathBuf,
    pub strict: bool,
}

/// Load and resolve the document without writing anything.
pub fn run(options: &CheckOptions) -> Result<()> {
    let (path, root) = super::load_root(options.file.as_deref(), &options.working_dir)?;
    super::enforce_issues(&root, options.strict)?;

    output::success(&format!("{} is valid", display_name(&path)));
    output::keyval("Summary", &root.to_string());

    if output::is_verbose() {
        output::header("Groups");
        for group in root.groups() {
            output::indent(&group.to_string(), 1);
        }
    }

    output::header("Configurations");
    for line in summary_lines(&root) {
        output::indent(&line, 1);
    }

    Ok(())
}

/// `work -> work.Brewfile (Taps: 1, Brews: 3)`; empty sections omitted.
pub fn summary_lines(root: &Root) -> Vec<String> {
    root.configurations()
        .iter()
        .map(|config| {
            let counts: Vec<String> = render::sections(config)
                .iter()
                .filter(|section| !section.entries.is_empty())
                .map(|section| format!("{}: {}", section.title, section.entries.len()))
                .collect();
            let counts = if counts.is_empty() {
                "empty".to_string()
            } else {
                counts.join(", ")
            };
            format!("{} -> {} ({})", config.name, config.file_name(), counts)
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_document;

    #[test]
    fn summary_lists_non_empty_sections() {
        let root = Root::build(
            parse_document(
                "groups:\n  dev: {taps: [a/b], brews: [git, wget]}\nconfigurations:\n  main: [dev]\n  work: [ghost]\n",
            )
            .expect("parse"),
        );

        assert_eq!(
            summary_lines(&root),
            vec![
                "main -> Brewfile (Taps: 1, Brews: 2)".to_string(),
                "work -> work.Brewfile (empty)".to_string(),
            ]
        );
    }
}
