use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use compio::fs::{self, OpenOptions};
use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;
use crate::tree::{RelativePath, TreeLayout};

/// Number of entries created versus found already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[display("{created} created, {existing} already present")]
pub struct Tally {
    pub created: usize,
    pub existing: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[display("directories: {directories}; files: {files}")]
pub struct MaterializeReport {
    pub directories: Tally,
    pub files: Tally,
}

impl MaterializeReport {
    pub fn created(&self) -> usize {
        self.directories.created + self.files.created
    }
}

/// Creates the directories and empty files of a [`TreeLayout`] below a root.
///
/// Every operation is idempotent: entries that already exist, of any kind, are
/// counted and left alone. Nothing is rolled back when a creation fails.
#[derive(Debug, Clone)]
pub struct Materializer {
    root: PathBuf,
    dry_run: bool,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// When set, existence is still checked but nothing is written.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn materialize(
        &self,
        layout: &TreeLayout,
    ) -> Result<MaterializeReport, MaterializeError> {
        let directories = self.create_directories(&layout.directories).await?;
        let files = self.create_files(&layout.files).await?;

        Ok(MaterializeReport { directories, files })
    }

    /// Expects `dirs` shallowest first; missing ancestors are created anyway.
    pub async fn create_directories(
        &self,
        dirs: &[RelativePath],
    ) -> Result<Tally, MaterializeError> {
        let mut tally = Tally::default();

        for dir in dirs {
            let path = dir.under(&self.root);
            if exists(&path) {
                debug!("Directory {} already present", path.display());
                tally.existing += 1;
                continue;
            }

            if !self.dry_run {
                fs::create_dir_all(&path)
                    .await
                    .context(CreateDirectorySnafu { path: path.clone() })?;
            }
            info!("Created directory {}", path.display());
            tally.created += 1;
        }

        Ok(tally)
    }

    pub async fn create_files(&self, files: &[RelativePath]) -> Result<Tally, MaterializeError> {
        let mut tally = Tally::default();

        for file in files {
            let path = file.under(&self.root);
            if exists(&path) {
                debug!("File {} already present", path.display());
                tally.existing += 1;
                continue;
            }

            if self.dry_run {
                info!("Created file {}", path.display());
                tally.created += 1;
                continue;
            }

            if let Some(parent) = file.parent().map(|parent| parent.under(&self.root)) {
                if !exists(&parent) {
                    fs::create_dir_all(&parent)
                        .await
                        .context(CreateDirectorySnafu { path: parent.clone() })?;
                }
            }

            if touch(&path)
                .await
                .context(CreateFileSnafu { path: path.clone() })?
            {
                info!("Created file {}", path.display());
                tally.created += 1;
            } else {
                debug!("File {} appeared before it could be created", path.display());
                tally.existing += 1;
            }
        }

        Ok(tally)
    }
}

/// Any entry counts, including dangling symlinks.
fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Creates an empty file without ever truncating an existing one.
/// Returns `false` if something already occupied the path.
async fn touch(path: &Path) -> std::io::Result<bool> {
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(_file) => Ok(true),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err),
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}
