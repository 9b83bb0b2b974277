//! Single-user to-do list over a flat JSON task file.
//!
//! Loads the task list once at startup, runs an interactive terminal session
//! that mutates it through the controller (saving after every change), and
//! saves once more on exit.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use todo::controller::Controller;
use todo::io::config::load_config;
use todo::io::store::TaskStore;
use todo::{logging, session};

#[derive(Parser)]
#[command(
    name = "todo",
    version,
    about = "Single-user to-do list with flat-file persistence"
)]
struct Cli {
    /// Path to the TOML config file; missing file means defaults.
    #[arg(long, default_value = ".todo/config.toml")]
    config: PathBuf,

    /// Task file path; overrides the configured one.
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let data_file = cli.file.unwrap_or(config.data_file);

    let mut controller = Controller::open(TaskStore::new(data_file));
    session::run(&mut controller, io::stdin().lock(), io::stdout().lock())
}
