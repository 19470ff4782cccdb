pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod project_identity;
pub mod render;
pub mod ui;

use clap::Parser;
use std::process::exit;

/// Run brewgen CLI entrypoint.
pub fn run_cli() {
    // 1. Parse & configure output
    let args = cli::args::Cli::parse();
    ui::init_colors(args.global.color);
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    // 2. Ctrl-C stops before the next manifest; files already written stay
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Interrupted, stopping after the current file.");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 3. Run
    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
