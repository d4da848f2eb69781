use compio::fs;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::filesystem::{MaterializeError, MaterializeReport, Materializer};
use crate::tree::TreeLayout;

pub struct Application;

impl Application {
    pub async fn run(
        app_config: impl Into<RuntimeConfig>,
    ) -> Result<MaterializeReport, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();

        debug!(
            "Reading tree from {}",
            app_config.input.best_effort_path_display()
        );
        let bytes = fs::read(&app_config.input).await.context(ReadSnafu {
            file_path: app_config.input.best_effort_path_display(),
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let layout = TreeLayout::parse(&text);
        if layout.is_empty() {
            info!("Tree contains no nodes, nothing to create");
        }
        debug!("Parsed layout: {:?}", layout);

        if app_config.dry_run {
            info!("Dry run, the filesystem will not be modified");
        }
        let report = Materializer::new(&app_config.root)
            .dry_run(app_config.dry_run)
            .materialize(&layout)
            .await
            .context(MaterializationSnafu)?;
        info!("Materialization finished: {}", report);

        Ok(report)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read the tree file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Critical failure encountered while creating the structure"))]
    MaterializationError { source: MaterializeError },
}
