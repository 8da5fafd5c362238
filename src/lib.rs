use std::path::PathBuf;
use clap::Parser;
use crate::config::Settings;
use crate::domain::{CollisionPolicy, ProjectLayout, RunReport};
use crate::error::{ResflatError, Result};
use crate::flatten::Flattener;
use crate::fs::clean_output_dir;

pub mod config;
pub mod domain;
pub mod error;
pub mod flatten;
pub mod fs;
pub mod naming;

/// Prefix of every raw resource copied from the data directories.
pub const DATA_PREFIX: &str = "data__";

#[derive(Parser, Debug)]
#[command(author, version, about = "Flatten project assets into Android res/raw and res/drawable", long_about = None)]
pub struct Args {
    /// Project root containing data/ and android_icons/
    pub project_root: PathBuf,

    /// YAML file overriding the default project layout
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the second pass over the platform data directory
    #[arg(long)]
    pub skip_duplicate_data: bool,

    /// Fail when two sources flatten to the same resource name
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Settings from the config file, with command line flags applied on top.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if self.skip_duplicate_data {
            settings.duplicate_data_pass = false;
        }
        if self.strict {
            settings.on_collision = CollisionPolicy::Error;
        }
        Ok(settings)
    }
}

pub fn run(args: &Args) -> Result<RunReport> {
    if !args.project_root.is_dir() {
        return Err(ResflatError::InvalidArgument(format!(
            "project root is not a directory: {}",
            args.project_root.display()
        )));
    }
    let settings = args.settings()?;
    let layout = ProjectLayout::new(&args.project_root, &settings);
    build_resources(&layout, &settings)
}

/// Rebuilds the raw and drawable resource directories of `layout` from scratch.
pub fn build_resources(layout: &ProjectLayout, settings: &Settings) -> Result<RunReport> {
    log::info!("Preparing resources in {}", layout.root.display());
    layout.check_sources()?;

    clean_output_dir(&layout.raw_dir)?;
    clean_output_dir(&layout.drawable_dir)?;

    let mut flattener = Flattener::new(settings.on_collision);

    flattener.flatten(DATA_PREFIX, &layout.common_data_dir, &layout.raw_dir, true)?;
    if settings.duplicate_data_pass {
        flattener.flatten(DATA_PREFIX, &layout.platform_data_dir, &layout.raw_dir, true)?;
    } else {
        log::debug!("Skipping pass over {}", layout.platform_data_dir.display());
    }

    flattener.copy_into(&layout.app_icon, drawable_target(layout)?)?;
    for icon_set in &layout.icon_sets {
        flattener.flatten(&icon_set.prefix, &icon_set.dir, &layout.drawable_dir, false)?;
    }

    let report = RunReport {
        raw_files: flattener.written_into(&layout.raw_dir),
        drawable_files: flattener.written_into(&layout.drawable_dir),
        collisions: flattener.into_collisions(),
    };
    log::info!(
        "Resources prepared: {} raw, {} drawable, {} overwritten",
        report.raw_files,
        report.drawable_files,
        report.collisions.len()
    );
    Ok(report)
}

/// The app icon keeps its original file name.
fn drawable_target(layout: &ProjectLayout) -> Result<PathBuf> {
    let name = layout.app_icon.file_name().ok_or_else(|| {
        ResflatError::MissingSourceFile { path: layout.app_icon.clone() }
    })?;
    Ok(layout.drawable_dir.join(name))
}
