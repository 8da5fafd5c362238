use serde::Deserialize;
use std::fs::FileType;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{ResflatError, Result};

/// A drawable source root and the prefix its flattened names start with.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IconSet {
    pub dir: PathBuf,
    #[serde(default)]
    pub prefix: String,
}

impl IconSet {
    pub fn new(dir: impl Into<PathBuf>, prefix: &str) -> Self {
        IconSet { dir: dir.into(), prefix: prefix.to_string() }
    }
}

/// What to do when a copy would replace a file written earlier in the run.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Last writer wins; the collision is logged and reported.
    #[default]
    Overwrite,
    Error,
}

/// Classification of a directory entry, taken without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

/// All paths one run reads from and writes to, resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub raw_dir: PathBuf,
    pub drawable_dir: PathBuf,
    pub common_data_dir: PathBuf,
    pub platform_data_dir: PathBuf,
    pub app_icon: PathBuf,
    pub icon_sets: Vec<IconSet>,
}

impl ProjectLayout {
    pub fn new(root: &Path, settings: &Settings) -> Self {
        ProjectLayout {
            root: root.to_path_buf(),
            raw_dir: root.join(&settings.raw_dir),
            drawable_dir: root.join(&settings.drawable_dir),
            common_data_dir: root.join(&settings.common_data_dir),
            platform_data_dir: root.join(&settings.platform_data_dir),
            app_icon: root.join(&settings.app_icon),
            icon_sets: settings
                .icon_sets
                .iter()
                .map(|set| IconSet::new(root.join(&set.dir), &set.prefix))
                .collect(),
        }
    }

    /// Fails on the first input that is missing, before any output is touched.
    pub fn check_sources(&self) -> Result<()> {
        let dirs = [&self.common_data_dir, &self.platform_data_dir]
            .into_iter()
            .chain(self.icon_sets.iter().map(|set| &set.dir));
        for dir in dirs {
            if !dir.is_dir() {
                return Err(ResflatError::MissingSourceDirectory { path: dir.clone() });
            }
        }
        if !self.app_icon.is_file() {
            return Err(ResflatError::MissingSourceFile { path: self.app_icon.clone() });
        }
        Ok(())
    }
}

/// A copy that replaced a file written earlier in the same run from another source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub target: PathBuf,
    pub previous: PathBuf,
    pub current: PathBuf,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub raw_files: usize,
    pub drawable_files: usize,
    pub collisions: Vec<Collision>,
}
