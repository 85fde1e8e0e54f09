//! Test-only helpers: scratch workspaces and a fixed branch source.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::core::naming::SOURCE_ARTIFACT;
use crate::io::config::CONFIG_FILE;
use crate::io::git::BranchSource;

/// Default resume contents written by [`Workspace::ready`].
pub const RESUME_BYTES: &[u8] = b"%PDF-1.7\n% test resume\n";

/// [`BranchSource`] that always reports the same branch.
#[derive(Debug, Clone)]
pub struct FixedBranch(String);

impl FixedBranch {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl BranchSource for FixedBranch {
    fn current_branch(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Scratch layout: `<tmp>/work` is the working directory, `<tmp>/exports`
/// the base directory. Both are removed on drop.
pub struct Workspace {
    temp: TempDir,
    root: PathBuf,
    resume: Vec<u8>,
}

impl Workspace {
    /// Empty working directory, no config, no resume, no base directory.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("tempdir")?;
        let root = temp.path().join("work");
        fs::create_dir_all(&root).context("create work dir")?;
        Ok(Self {
            temp,
            root,
            resume: Vec::new(),
        })
    }

    /// Working directory with a valid config, a resume and an empty base directory.
    pub fn ready() -> Result<Self> {
        let mut ws = Self::new()?;
        fs::create_dir_all(ws.base_dir()).context("create base dir")?;
        let base = ws.base_dir().display().to_string();
        ws.write_config(&base, "Ada", "Lovelace")?;
        ws.write_resume(RESUME_BYTES)?;
        ws.resume = RESUME_BYTES.to_vec();
        Ok(ws)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_dir(&self) -> PathBuf {
        self.temp.path().join("exports")
    }

    pub fn resume_path(&self) -> PathBuf {
        self.root().join(SOURCE_ARTIFACT)
    }

    /// Contents last written by [`Workspace::ready`].
    pub fn resume_bytes(&self) -> &[u8] {
        &self.resume
    }

    pub fn write_resume(&self, contents: &[u8]) -> Result<()> {
        fs::write(self.resume_path(), contents).context("write resume")
    }

    pub fn write_config(&self, base_dir: &str, first: &str, last: &str) -> Result<()> {
        self.write_raw_config(&format!(
            "# export settings\nBASE_DIR=\"{base_dir}\"\nFIRST_NAME={first}\nLAST_NAME={last}\n"
        ))
    }

    pub fn write_raw_config(&self, contents: &str) -> Result<()> {
        fs::write(self.root().join(CONFIG_FILE), contents).context("write config")
    }

    /// Names of entries directly under the base directory (sorted).
    pub fn base_entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.base_dir()).context("read base dir")? {
            let entry = entry.context("read entry")?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }

    /// Turn the working directory into a git repo with one commit on `branch`.
    pub fn init_git(&self, branch: &str) -> Result<()> {
        self.git(&["init", "--quiet"])?;
        self.git(&["checkout", "--quiet", "-b", branch])?;
        self.git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "--allow-empty",
            "-m",
            "init",
        ])
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.root())
            .status()
            .with_context(|| format!("spawn git {}", args.join(" ")))?;
        if !status.success() {
            return Err(anyhow!("git {} failed", args.join(" ")));
        }
        Ok(())
    }
}
