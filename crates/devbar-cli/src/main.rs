//! Devbar CLI Application
//!
//! Terminal front end for the devbar React tutorial.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, ModuleArgs, StepArgs};
use clap::Parser;
use cli::Cli;
use devbar_core::{ContentRegistryBuilder, OperationStatus, ProgressTracker, SessionFile};
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        session_file,
        catalog_dir,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // Authoring errors in the catalog are fatal
    let registry = ContentRegistryBuilder::new()
        .with_catalog_dir(catalog_dir)
        .build()
        .context("Failed to load lesson catalog")?;

    if let Some(Commands::Validate) = command {
        return renderer.render(
            &OperationStatus::success(format!(
                "Catalog is valid: {} modules, {} steps",
                registry.len(),
                registry.total_steps()
            ))
            .to_string(),
        );
    }

    let session = SessionFile::new(session_file).context("Failed to locate session file")?;
    let state = session
        .load()
        .with_context(|| format!("Failed to read session from {}", session.path().display()))?;
    let tracker = ProgressTracker::resume(&registry, state);

    info!("Devbar started");

    let mut cli = Cli::new(tracker, session, renderer);
    match command {
        Some(Commands::Modules) => cli.list_modules(),
        Some(Commands::Intro(ModuleArgs { module })) => cli.intro(&module),
        Some(Commands::Step(StepArgs { module, index })) => cli.step(&module, index),
        Some(Commands::Next) => cli.next(),
        Some(Commands::Prev) => cli.prev(),
        Some(Commands::Reset(ModuleArgs { module })) => cli.reset(&module),
        Some(Commands::Status) | Some(Commands::Validate) | None => cli.status(),
    }
}
