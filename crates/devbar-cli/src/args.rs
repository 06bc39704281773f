use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Interactive terminal tutorial for building a React application
///
/// Devbar walks through a series of lesson modules, one step at a time, and
/// remembers where you left off. Run it without a command to see your
/// progress.
#[derive(Parser)]
#[command(version, about, name = "devbar")]
pub struct Args {
    /// Path to the session file holding your progress. Defaults to
    /// $XDG_STATE_HOME/devbar/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Load lesson files (*.yaml) from this directory instead of the
    /// built-in lessons
    #[arg(long, global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Devbar CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show progress across all modules
    Status,
    /// List the lesson modules
    #[command(alias = "ls")]
    Modules,
    /// Show a module's introduction
    Intro(ModuleArgs),
    /// Open a step of a module
    #[command(alias = "s")]
    Step(StepArgs),
    /// Continue with the next step
    #[command(alias = "n")]
    Next,
    /// Go back to the previous step
    #[command(alias = "p")]
    Prev,
    /// Clear all progress of a module
    Reset(ModuleArgs),
    /// Check the lesson catalog for authoring errors
    Validate,
}

#[derive(ClapArgs)]
pub struct ModuleArgs {
    #[arg(help = "Module identifier, e.g. 1-react-basics")]
    pub module: String,
}

#[derive(ClapArgs)]
pub struct StepArgs {
    #[arg(help = "Module identifier, e.g. 1-react-basics")]
    pub module: String,
    #[arg(help = "1-based step number within the module")]
    pub index: u32,
}
