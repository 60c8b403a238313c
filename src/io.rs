use crate::error::{LocatorError, Result};
use crate::locate::ensure_unique_ids;
use crate::model::Forest;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads one JSON array of root folders.
pub fn read_forest(path: &Path) -> Result<Forest> {
    let bytes = fs::read(path).map_err(|source| LocatorError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_slice(&bytes).map_err(|source| LocatorError::Parse { path: path.to_path_buf(), source })
}

/// Concatenates the roots of every file in argument order. With `strict`, repeated ids are rejected.
pub fn load_forest(paths: &[PathBuf], strict: bool) -> Result<Forest> {
    let mut forest = Forest::default();
    for p in paths {
        let part = read_forest(p)?;
        tracing::debug!(path = %p.display(), roots = part.roots.len(), "tree loaded");
        forest.roots.extend(part.roots);
    }
    if strict { ensure_unique_ids(&forest.roots)?; }
    Ok(forest)
}

pub fn atomic_write(out_path: &Path, data: &[u8]) -> Result<()> {
    let wrap = |source| LocatorError::Write { path: out_path.to_path_buf(), source };
    if let Some(dir) = out_path.parent() { fs::create_dir_all(dir).map_err(wrap)?; }
    let tmp = out_path.with_extension("tmp");
    {
        let mut f = fs::File::create(&tmp).map_err(wrap)?;
        f.write_all(data).map_err(wrap)?;
        f.sync_all().map_err(wrap)?;
    }
    fs::rename(&tmp, out_path).map_err(wrap)?;
    Ok(())
}
