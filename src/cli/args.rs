use crate::ui::ColorChoice;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "brewgen",
    about = "Generate Brewfiles from package groups",
    long_about = "Generate Homebrew Brewfiles from a declarative YAML description of package groups and configurations",
    version,
    args_conflicts_with_subcommands = true,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    /// Options for the default `generate` command
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Verbose output (show skipped entries and unknown groups)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print manifests to stdout instead of writing files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Input file (default: brew.yml, then brew.yaml)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory the manifests are written to (default: current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Generate only the named configuration (repeatable)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Fail on malformed entries and unknown group references
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one Brewfile per configuration (default)
    Generate(GenerateArgs),

    /// Validate the input and summarize each configuration
    Check {
        /// Input file (default: brew.yml, then brew.yaml)
        #[arg(short = 'f', long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Fail on malformed entries and unknown group references
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
