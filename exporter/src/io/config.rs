//! Export configuration stored as `KEY=value` lines in `.env`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::core::naming::output_file_name;
use crate::error::ExportError;

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".env";

pub const KEY_BASE_DIR: &str = "BASE_DIR";
pub const KEY_FIRST_NAME: &str = "FIRST_NAME";
pub const KEY_LAST_NAME: &str = "LAST_NAME";

/// Export configuration, loaded once per run.
///
/// All three fields are required and non-empty; [`load_config`] refuses
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Root under which export folders are created (as written in the file).
    pub base_directory: PathBuf,
    pub first_name: String,
    pub last_name: String,
}

impl ExportConfig {
    /// Resolve `base_directory` for use: `~` expands to the home directory and
    /// relative paths are taken from `root`.
    pub fn resolve_base_dir(&self, root: &Path) -> PathBuf {
        let expanded = expand_home(&self.base_directory);
        root.join(expanded)
    }

    /// `{first}_{last}_resume.pdf`.
    pub fn output_file_name(&self) -> String {
        output_file_name(&self.first_name, &self.last_name)
    }
}

/// Load config from a `KEY=value` file.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is accepted,
/// and one matching pair of `"` or `'` around a value is stripped. Values are
/// taken literally: no escapes, no `$VAR` expansion. Later keys win.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<ExportConfig, ExportError> {
    if !path.is_file() {
        return Err(ExportError::ConfigMissing {
            path: path.to_path_buf(),
        });
    }
    let unreadable = |source| ExportError::ConfigUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let contents = fs::read_to_string(path).map_err(unreadable)?;
    let values = parse_pairs(&contents).map_err(unreadable)?;
    debug!(keys = values.len(), "config parsed");

    let base_directory = required(&values, KEY_BASE_DIR, path)?;
    let first_name = required(&values, KEY_FIRST_NAME, path)?;
    let last_name = required(&values, KEY_LAST_NAME, path)?;

    Ok(ExportConfig {
        base_directory: PathBuf::from(base_directory),
        first_name,
        last_name,
    })
}

fn parse_pairs(contents: &str) -> io::Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected KEY=value", idx + 1),
            ));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: empty key", idx + 1),
            ));
        }
        values.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    Ok(values)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn required(
    values: &HashMap<String, String>,
    key: &'static str,
    path: &Path,
) -> Result<String, ExportError> {
    match values.get(key).map(|v| v.trim()) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ExportError::ConfigKeyMissing {
            key,
            path: path.to_path_buf(),
        }),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
