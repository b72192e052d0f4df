//! Writes a layout plan to disk
//!
//! Each role lands at `<root>/<label>/<role file name>`.

use crate::bundle::{LayoutPlan, OutputLabel};
use crate::utils::OutputError;
use std::path::{Path, PathBuf};

/// Directory a label's files are written into
pub fn destination(root: &Path, label: &OutputLabel) -> PathBuf {
    root.join(label)
}

/// Create `dir` and write every buffer of `plan` into it.
///
/// Returns the written paths in plan order. Existing files are overwritten.
pub fn write_plan(plan: &LayoutPlan, dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(dir).map_err(|e| OutputError::CreateDirFailed {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut written = Vec::with_capacity(plan.len());
    for (role, data) in plan.iter() {
        let path = dir.join(role.file_name());
        std::fs::write(&path, data).map_err(|e| OutputError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), data.len());
        written.push(path);
    }

    Ok(written)
}
