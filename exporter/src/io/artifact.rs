//! Filesystem steps of an export: precondition checks, folder creation, copy.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::ExportError;

/// The compiled resume must exist as a regular file.
pub fn ensure_source(path: &Path) -> Result<(), ExportError> {
    if path.is_file() {
        return Ok(());
    }
    Err(ExportError::SourceMissing {
        path: path.to_path_buf(),
    })
}

/// The base directory must already exist; it is never created.
pub fn ensure_base_dir(path: &Path) -> Result<(), ExportError> {
    if path.is_dir() {
        return Ok(());
    }
    Err(ExportError::BaseDirMissing {
        path: path.to_path_buf(),
    })
}

/// Create `base/name` (and any missing parents). Pre-existence is fine.
#[instrument(skip_all, fields(name = %name))]
pub fn create_target_dir(base: &Path, name: &str) -> Result<PathBuf, ExportError> {
    let target = base.join(name);
    fs::create_dir_all(&target).map_err(|source| ExportError::CreateDir {
        path: target.clone(),
        source,
    })?;
    debug!(target = %target.display(), "target directory ready");
    Ok(target)
}

/// Copy `source` over `target`, keeping permissions and modification time.
///
/// The copy lands in a temp file next to `target` and is renamed into place,
/// so a failed copy never leaves a partial file or clobbers an earlier export.
///
/// Returns the number of bytes copied.
#[instrument(skip_all, fields(source = %source.display(), target = %target.display()))]
pub fn copy_artifact(source: &Path, target: &Path) -> Result<u64, ExportError> {
    let copy_err = |err| ExportError::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: err,
    };
    let tmp_path = target.with_extension("pdf.tmp");
    let bytes = match copy_to_temp(source, &tmp_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            if tmp_path.exists()
                && let Err(cleanup) = fs::remove_file(&tmp_path)
            {
                debug!(err = %cleanup, "temp copy not removed");
            }
            return Err(copy_err(err));
        }
    };
    fs::rename(&tmp_path, target).map_err(copy_err)?;
    info!(bytes, "artifact copied");
    Ok(bytes)
}

fn copy_to_temp(source: &Path, tmp_path: &Path) -> io::Result<u64> {
    if tmp_path.exists() {
        fs::remove_file(tmp_path)?;
    }
    let bytes = fs::copy(source, tmp_path)?;
    preserve_mtime(source, tmp_path)?;
    Ok(bytes)
}

// The owner may set times through a read-only handle.
fn preserve_mtime(source: &Path, target: &Path) -> io::Result<()> {
    let modified = fs::metadata(source)?.modified()?;
    File::open(target)?.set_modified(modified)
}
