use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ResflatError, Result};

/// Empties `output_dir` and recreates it.
///
/// Only direct children that are not directories can be removed. Every child
/// is checked before the first deletion, so an unsupported entry leaves the
/// directory as it was.
pub fn clean_output_dir(output_dir: &Path) -> Result<()> {
    match fs::symlink_metadata(output_dir) {
        Ok(meta) if meta.is_dir() => {
            log::info!("Cleaning output directory: {}", output_dir.display());
            let mut children = Vec::new();
            let entries = fs::read_dir(output_dir).map_err(|e| ResflatError::io(output_dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| ResflatError::io(output_dir, e))?;
                let path = entry.path();
                let file_type = entry.file_type().map_err(|e| ResflatError::io(&path, e))?;
                if file_type.is_dir() {
                    return Err(ResflatError::UnsupportedEntryKind { path });
                }
                children.push(path);
            }
            for child in &children {
                fs::remove_file(child).map_err(|e| ResflatError::io(child, e))?;
            }
            fs::remove_dir(output_dir).map_err(|e| ResflatError::io(output_dir, e))?;
        }
        Ok(_) => {
            return Err(ResflatError::UnsupportedEntryKind { path: output_dir.to_path_buf() });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(ResflatError::io(output_dir, e)),
    }
    fs::create_dir_all(output_dir).map_err(|e| ResflatError::io(output_dir, e))?;
    Ok(())
}

/// Copies the bytes of `source` to `target`, replacing any existing file.
pub fn copy_resource(source: &Path, target: &Path) -> Result<()> {
    log::debug!("Copying {} -> {}", source.display(), target.display());
    fs::copy(source, target).map_err(|source_err| ResflatError::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: source_err,
    })?;
    Ok(())
}
