//! Flat-file storage for the scoreboard.
//!
//! Two JSON documents and a plain-text refresh marker in one data directory are
//! the source of truth. Nothing is cached in memory between requests.

mod repository;

pub use repository::*;

use std::path::Path;

use crate::errors::AppError;

/// Ensure the data directory exists and return a repository rooted at it.
pub async fn init_store(data_dir: &Path) -> Result<Repository, AppError> {
    tokio::fs::create_dir_all(data_dir).await?;
    Ok(Repository::new(data_dir))
}
