//! Shared fixtures for resflat CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project root with the default Android asset layout.
#[allow(dead_code)]
pub struct Project {
    root: TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Empty source directories plus the app icon.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        for dir in [
            "data",
            "android_icons/tree",
            "android_icons/menu",
            "android_icons/tabs",
            "android_icons/text_search",
        ] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create source dir");
        }
        let project = Self { root };
        project.write("android_icons/fbreader.png", "fbreader");
        project
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.path().join("res/raw")
    }

    pub fn drawable_dir(&self) -> PathBuf {
        self.path().join("res/drawable")
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().expect("fixture path has a parent"))
            .expect("Failed to create fixture parent");
        fs::write(path, content).expect("Failed to write fixture file");
    }

    /// Sorted file names directly inside `dir`.
    pub fn listing(&self, dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("Failed to read output dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// `resflat <project root>`
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("resflat").expect("Failed to locate resflat binary");
        cmd.arg(self.path()).current_dir(self.path());
        cmd
    }
}
