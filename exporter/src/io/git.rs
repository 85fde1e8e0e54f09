//! Git adapter for the default folder name.
//!
//! Only the branch name is needed, so this is a thin wrapper around one
//! `git rev-parse` call. Failures never abort an export: callers go through
//! [`branch_or_fallback`].

use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

use crate::core::naming::FALLBACK_BRANCH;

/// Anything that can name the current branch.
pub trait BranchSource {
    fn current_branch(&self) -> Result<String>;
}

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run_capture(&self, args: &[&str]) -> Result<String> {
        let output = self.run_checked(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))
    }
}

impl BranchSource for Git {
    /// Current branch as printed by `git rev-parse --abbrev-ref HEAD`.
    ///
    /// A detached HEAD reports the literal `HEAD`.
    #[instrument(skip_all, fields(workdir = %self.workdir.display()))]
    fn current_branch(&self) -> Result<String> {
        let out = self.run_capture(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let name = out.trim().to_string();
        if name.is_empty() {
            return Err(anyhow!("git reported an empty branch name"));
        }
        debug!(branch = %name, "current branch");
        Ok(name)
    }
}

/// Branch name, or [`FALLBACK_BRANCH`] when the lookup fails for any reason.
pub fn branch_or_fallback<B: BranchSource + ?Sized>(source: &B) -> String {
    match source.current_branch() {
        Ok(name) => name,
        Err(err) => {
            debug!(err = %format!("{err:#}"), fallback = FALLBACK_BRANCH, "branch lookup failed");
            FALLBACK_BRANCH.to_string()
        }
    }
}
