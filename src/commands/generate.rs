use crate::core::configuration::Configuration;
use crate::core::resolver::Root;
use crate::error::{BrewgenError, Result};
use crate::render;
use crate::ui as output;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input file; probed in `working_dir` when absent
    pub file: Option<PathBuf>,
    pub working_dir: PathBuf,
    /// Defaults to `working_dir`
    pub output_dir: Option<PathBuf>,
    /// Generate only these configurations
    pub only: Vec<String>,
    pub strict: bool,
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            file: None,
            working_dir: working_dir.into(),
            output_dir: None,
            only: Vec::new(),
            strict: false,
            dry_run: false,
        }
    }

    fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(self.working_dir.as_path())
    }
}

/// Generate one manifest per configuration, in document order.
///
/// Returns the paths written (empty on a dry run).
pub fn run(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    let (_, root) = super::load_root(options.file.as_deref(), &options.working_dir)?;
    super::enforce_issues(&root, options.strict)?;

    let configurations = select(&root, &options.only)?;
    if configurations.is_empty() {
        output::warning("No configurations defined, nothing to generate");
        return Ok(Vec::new());
    }

    if !options.dry_run {
        let dir = options.output_dir();
        fs::create_dir_all(dir).map_err(|e| BrewgenError::IoError {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let mut written = Vec::new();
    for config in &configurations {
        if output::is_interrupted() {
            return Err(BrewgenError::Interrupted);
        }

        output::info(&format!("Generating: {}", config.name));
        let manifest = render::render_manifest(config);

        if options.dry_run {
            output::header(&config.file_name());
            print!("{}", manifest);
            continue;
        }

        let path = write_manifest(options.output_dir(), config, &manifest)?;
        output::success(&format!("Wrote {}", path.display()));
        written.push(path);
    }

    Ok(written)
}

fn select<'a>(root: &'a Root, only: &[String]) -> Result<Vec<Configuration<'a>>> {
    if only.is_empty() {
        return Ok(root.configurations());
    }

    only.iter()
        .map(|name| {
            root.configuration(name)
                .ok_or_else(|| BrewgenError::ConfigurationNotFound(name.clone()))
        })
        .collect()
}

/// Overwrites any existing file of the same name.
pub fn write_manifest(dir: &Path, config: &Configuration<'_>, manifest: &str) -> Result<PathBuf> {
    let path = dir.join(config.file_name());
    fs::write(&path, manifest).map_err(|e| BrewgenError::IoError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
