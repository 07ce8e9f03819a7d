//! Local filesystem candidate

use super::Source;
use crate::error::LoadError;
use async_trait::async_trait;
use std::path::PathBuf;

/// A catalog file on the local filesystem
pub struct LocalSource {
    location: String,
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            location: path.display().to_string(),
            path,
        }
    }
}

#[async_trait]
impl Source for LocalSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Unreadable {
                location: self.location.clone(),
                message: e.to_string(),
            })
    }

    fn location(&self) -> &str {
        &self.location
    }
}
