//! Command dispatcher
//!
//! Routes CLI commands to their handlers.

use crate::cli::args::{Cli, Command, GenerateArgs};
use crate::commands;
use crate::commands::check::CheckOptions;
use crate::commands::generate::GenerateOptions;
use crate::error::{BrewgenError, Result};
use std::path::PathBuf;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        None => run_generate(args, &args.generate),
        Some(Command::Generate(generate)) => run_generate(args, generate),
        Some(Command::Check { file, strict }) => commands::check::run(&CheckOptions {
            file: file.clone(),
            working_dir: working_dir()?,
            strict: *strict,
        }),
        Some(Command::Completions { shell }) => commands::completions::run(*shell),
    }
}

fn run_generate(args: &Cli, generate: &GenerateArgs) -> Result<()> {
    let options = generate_options(args, generate, working_dir()?);
    commands::generate::run(&options).map(|_| ())
}

pub(crate) fn generate_options(
    args: &Cli,
    generate: &GenerateArgs,
    working_dir: PathBuf,
) -> GenerateOptions {
    GenerateOptions {
        file: generate.file.clone(),
        working_dir,
        output_dir: generate.output_dir.clone(),
        only: generate.only.clone(),
        strict: generate.strict,
        dry_run: args.global.dry_run,
    }
}

fn working_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(BrewgenError::StdIoError)
}
