mod backend;
mod file;

pub use backend::BackendClient;
pub use file::FileSource;

use smarteats_core::menu::MenuError;
use smarteats_types::DiningHall;

/// Where dining hall menus come from
#[async_trait::async_trait]
pub trait MenuSource: Send + Sync {
    /// All halls with their dishes
    async fn halls(&self) -> Result<Vec<DiningHall>, SourceError>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned HTTP {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Payload(#[from] MenuError),
}
