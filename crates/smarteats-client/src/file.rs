use std::path::PathBuf;

use async_trait::async_trait;
use smarteats_core::menu::parse_halls;
use smarteats_types::DiningHall;

use crate::{MenuSource, SourceError};

/// Halls payload saved to disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MenuSource for FileSource {
    async fn halls(&self) -> Result<Vec<DiningHall>, SourceError> {
        tracing::info!("Loading dining halls from file: {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path).await?;
        let halls = parse_halls(&json)?;
        tracing::info!("Loaded {} dining halls from file", halls.len());
        Ok(halls)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
