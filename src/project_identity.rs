//! Central project identity contract.
//!
//! Names the binary, the input files it looks for and the files it writes.

pub const BINARY_NAME: &str = "brewgen";

/// Input files probed in the working directory, in order.
pub const DEFAULT_INPUT_FILES: &[&str] = &["brew.yml", "brew.yaml"];

/// Configuration whose manifest is written as a bare `Brewfile`.
pub const MAIN_CONFIGURATION: &str = "main";
pub const MANIFEST_BASENAME: &str = "Brewfile";

/// Output file name for a configuration.
pub fn manifest_file_name(configuration: &str) -> String {
    if configuration == MAIN_CONFIGURATION {
        MANIFEST_BASENAME.to_string()
    } else {
        format!("{}.{}", configuration, MANIFEST_BASENAME)
    }
}
