//! Folder and file naming rules.

use chrono::NaiveDate;

/// Compiled resume expected in the working directory.
pub const SOURCE_ARTIFACT: &str = "resume.pdf";

/// Branch label used when `git` cannot report the current branch.
pub const FALLBACK_BRANCH: &str = "unknown";

/// `mm-dd-yy`, zero padded.
pub const DATE_FORMAT: &str = "%m-%d-%y";

/// How the destination folder name was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirChoice {
    /// The user left the prompt blank.
    Default(String),
    /// The user typed a name (already trimmed).
    Custom(String),
}

impl DirChoice {
    pub fn name(&self) -> &str {
        match self {
            DirChoice::Default(name) | DirChoice::Custom(name) => name,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, DirChoice::Default(_))
    }
}

/// Default folder name: `"<branch> <mm-dd-yy>"`.
pub fn default_dir_name(branch: &str, date: NaiveDate) -> String {
    format!("{} {}", branch, date.format(DATE_FORMAT))
}

/// Pick the folder name from the prompt answer, falling back to `default` when blank.
pub fn resolve_dir_name(answer: &str, default: &str) -> DirChoice {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        DirChoice::Default(default.to_string())
    } else {
        DirChoice::Custom(trimmed.to_string())
    }
}

/// Destination file name: `"{first}_{last}_resume.pdf"`.
pub fn output_file_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name}_{last_name}_resume.pdf")
}
