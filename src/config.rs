//! Run settings: built-in defaults, optionally replaced by a YAML file.
//!
//! Every key of the file is optional; missing keys keep their default value.
//! Command line flags are applied on top by the caller.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CollisionPolicy, IconSet};
use crate::error::{ResflatError, Result};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub raw_dir: PathBuf,
    pub drawable_dir: PathBuf,
    pub common_data_dir: PathBuf,
    pub platform_data_dir: PathBuf,
    pub app_icon: PathBuf,
    /// Flattened into the drawable dir in this order.
    pub icon_sets: Vec<IconSet>,
    /// Second pass over `platform_data_dir`. The default layout points it at the
    /// same directory as `common_data_dir`, so every data file is copied twice.
    pub duplicate_data_pass: bool,
    pub on_collision: CollisionPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            raw_dir: PathBuf::from("res/raw"),
            drawable_dir: PathBuf::from("res/drawable"),
            common_data_dir: PathBuf::from("data"),
            platform_data_dir: PathBuf::from("data"),
            app_icon: PathBuf::from("android_icons/fbreader.png"),
            icon_sets: vec![
                IconSet::new("android_icons/tree", ""),
                IconSet::new("android_icons/menu", ""),
                IconSet::new("android_icons/tabs", ""),
                IconSet::new("android_icons/text_search", "text_search_"),
            ],
            duplicate_data_pass: true,
            on_collision: CollisionPolicy::Overwrite,
        }
    }
}

impl Settings {
    /// Defaults when `path` is `None`, otherwise the parsed file.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        log::debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ResflatError::io(path, e))?;
        Settings::parse(&content).map_err(|source| ResflatError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Settings, serde_yaml::Error> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_yaml::from_str(content)
    }
}
