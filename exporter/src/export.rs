//! Orchestration for one export.
//!
//! Checks run before anything touches the filesystem: configuration, the
//! compiled resume, then the base directory. Only after all three pass is the
//! user prompted and the destination folder created.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::core::naming::{SOURCE_ARTIFACT, default_dir_name, resolve_dir_name};
use crate::error::ExportError;
use crate::io::artifact::{copy_artifact, create_target_dir, ensure_base_dir, ensure_source};
use crate::io::config::{CONFIG_FILE, load_config};
use crate::io::git::{BranchSource, branch_or_fallback};
use crate::io::terminal::Terminal;

pub const BANNER: &str = "Resume Export Script";
const RULE_WIDTH: usize = 40;

/// Well-known paths relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub source_path: PathBuf,
}

impl ExportPaths {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            config_path: root.join(CONFIG_FILE),
            source_path: root.join(SOURCE_ARTIFACT),
        }
    }
}

/// Inputs for [`run_export`].
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub paths: ExportPaths,
    /// Date stamped into the default folder name.
    pub today: NaiveDate,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub dir_name: String,
    pub used_default: bool,
    pub target_dir: PathBuf,
    pub target_file: PathBuf,
    pub bytes: u64,
}

/// Run the export end to end, talking to the user through `terminal`.
#[instrument(skip_all, fields(root = %request.paths.root.display()))]
pub fn run_export<B, T>(
    request: &ExportRequest,
    branch: &B,
    terminal: &mut T,
) -> Result<ExportOutcome, ExportError>
where
    B: BranchSource + ?Sized,
    T: Terminal + ?Sized,
{
    let paths = &request.paths;
    say(terminal, BANNER)?;
    say(terminal, &"=".repeat(RULE_WIDTH))?;

    let config = load_config(&paths.config_path)?;
    ensure_source(&paths.source_path)?;
    let base_dir = config.resolve_base_dir(&paths.root);
    ensure_base_dir(&base_dir)?;
    debug!(base_dir = %base_dir.display(), "preconditions satisfied");

    say(terminal, "")?;
    say(
        terminal,
        &format!("Base output directory: {}", base_dir.display()),
    )?;
    let default_name = default_dir_name(&branch_or_fallback(branch), request.today);
    say(
        terminal,
        &format!("Enter a subdirectory name (or press Enter for default: {default_name}):"),
    )?;
    let answer = terminal
        .ask("Directory name: ")
        .map_err(ExportError::Console)?;

    let choice = resolve_dir_name(&answer, &default_name);
    if choice.is_default() {
        say(
            terminal,
            &format!("Using default directory name: {}", choice.name()),
        )?;
    }

    let target_dir = create_target_dir(&base_dir, choice.name())?;
    say(
        terminal,
        &format!("✅ Created directory: {}", target_dir.display()),
    )?;

    let target_file = target_dir.join(config.output_file_name());
    let bytes = copy_artifact(&paths.source_path, &target_file)?;
    say(
        terminal,
        &format!("✅ Resume copied to: {}", target_file.display()),
    )?;

    info!(dir = choice.name(), default = choice.is_default(), "export complete");
    Ok(ExportOutcome {
        dir_name: choice.name().to_string(),
        used_default: choice.is_default(),
        target_dir,
        target_file,
        bytes,
    })
}

fn say<T: Terminal + ?Sized>(terminal: &mut T, line: &str) -> Result<(), ExportError> {
    terminal.say(line).map_err(ExportError::Console)
}
