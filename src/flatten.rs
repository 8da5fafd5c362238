use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::domain::{Collision, CollisionPolicy, EntryKind};
use crate::error::{ResflatError, Result};
use crate::fs::copy_resource;
use crate::naming::{flattened_os_name, DIR_SEPARATOR};

/// Version-control metadata directory pruned from every source tree.
pub const VCS_DIR: &str = ".svn";

/// Copies nested source trees into flat target directories.
///
/// Remembers which source produced every target written during the run, so a
/// later copy onto the same name from a different source shows up as a
/// [`Collision`].
#[derive(Debug)]
pub struct Flattener {
    policy: CollisionPolicy,
    written: HashMap<PathBuf, PathBuf>,
    collisions: Vec<Collision>,
}

impl Flattener {
    pub fn new(policy: CollisionPolicy) -> Self {
        Flattener { policy, written: HashMap::new(), collisions: Vec::new() }
    }

    /// Copies every regular file under `source_dir` into `target_dir`.
    ///
    /// A file at `a/b/c.txt` lands at `flattened_name(prefix + "a__b__", "c.txt")`.
    /// A name that cannot be lower-cased fails with `UnsupportedFileName`.
    /// `.svn` directories are pruned, anything that is neither a file nor a
    /// directory is skipped. Entries are visited depth first in file name
    /// order. Returns the number of files copied.
    pub fn flatten(
        &mut self,
        prefix: &str,
        source_dir: &Path,
        target_dir: &Path,
        replace_dot: bool,
    ) -> Result<usize> {
        log::info!("Flattening {} -> {}", source_dir.display(), target_dir.display());
        let walker = WalkDir::new(source_dir)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_vcs_dir(entry));

        let mut copied = 0;
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(source_dir, e))?;
            match EntryKind::from(entry.file_type()) {
                EntryKind::File => {}
                EntryKind::Directory => continue,
                EntryKind::Other => {
                    log::debug!("Skipping {}", entry.path().display());
                    continue;
                }
            }

            let name = relative_flat_name(prefix, &relative_parts(&entry), replace_dot)
                .ok_or_else(|| ResflatError::UnsupportedFileName {
                    path: entry.path().to_path_buf(),
                })?;
            self.copy_into(entry.path(), target_dir.join(name))?;
            copied += 1;
        }
        Ok(copied)
    }

    /// Copies a single file to `target`, with the same collision bookkeeping
    /// as [`Flattener::flatten`].
    pub fn copy_into(&mut self, source: &Path, target: PathBuf) -> Result<()> {
        if let Some(previous) = self.written.get(&target) {
            if previous != source {
                if self.policy == CollisionPolicy::Error {
                    return Err(ResflatError::NameCollision {
                        target,
                        previous: previous.clone(),
                        current: source.to_path_buf(),
                    });
                }
                log::warn!(
                    "{} overwrites {} (from {})",
                    source.display(),
                    target.display(),
                    previous.display()
                );
                self.collisions.push(Collision {
                    target: target.clone(),
                    previous: previous.clone(),
                    current: source.to_path_buf(),
                });
            }
        }
        copy_resource(source, &target)?;
        self.written.insert(target, source.to_path_buf());
        Ok(())
    }

    /// Distinct files written directly into `dir` so far.
    pub fn written_into(&self, dir: &Path) -> usize {
        self.written.keys().filter(|target| target.parent() == Some(dir)).count()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn into_collisions(self) -> Vec<Collision> {
        self.collisions
    }
}

fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == VCS_DIR
}

/// Path components of `entry` below the walk root.
fn relative_parts(entry: &DirEntry) -> Vec<&OsStr> {
    let parts: Vec<&OsStr> = entry.path().iter().collect();
    let skip = parts.len().saturating_sub(entry.depth());
    parts[skip..].to_vec()
}

fn relative_flat_name(prefix: &str, parts: &[&OsStr], replace_dot: bool) -> Option<OsString> {
    let (file_name, dirs) = parts.split_last()?;
    let mut joined = OsString::from(prefix);
    for dir in dirs {
        joined.push(dir);
        joined.push(DIR_SEPARATOR);
    }
    joined.push(file_name);
    flattened_os_name(&joined, replace_dot)
}

fn walk_error(root: &Path, err: walkdir::Error) -> ResflatError {
    let path = err.path().unwrap_or(root).to_path_buf();
    ResflatError::Io { path, source: err.into() }
}
