//! Export the compiled resume into a named folder.
//!
//! Reads `.env` from the working directory, asks for a folder name (default:
//! `<branch> <mm-dd-yy>`), and copies `resume.pdf` there as
//! `<first>_<last>_resume.pdf`.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use resume_export::error::ExportError;
use resume_export::exit_codes;
use resume_export::export::{ExportPaths, ExportRequest, run_export};
use resume_export::io::git::Git;
use resume_export::io::terminal::LineTerminal;
use resume_export::logging;

#[derive(Parser)]
#[command(
    name = "export-resume",
    version,
    about = "Copy the compiled resume into a dated or named export folder"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();
    if let Err(err) = run() {
        eprintln!("❌ Error: {err:#}");
        if let Some(hint) = err.downcast_ref::<ExportError>().and_then(ExportError::hint) {
            eprintln!("{hint}");
        }
        std::process::exit(exit_codes::FAILED);
    }
    std::process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let root = std::env::current_dir().context("resolve working directory")?;
    let request = ExportRequest {
        paths: ExportPaths::new(&root),
        today: Local::now().date_naive(),
    };
    let git = Git::new(&root);
    let mut terminal = LineTerminal::stdio();
    let outcome = run_export(&request, &git, &mut terminal)?;
    println!();
    println!(
        "🎉 Resume successfully exported to: {}",
        outcome.target_dir.display()
    );
    Ok(())
}
