//! Saving downloaded documents

use super::error::ActionError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Directory that receives downloaded files
#[derive(Debug, Clone)]
pub struct DownloadDir {
    dir: PathBuf,
}

impl DownloadDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` to `file_name` inside the directory.
    ///
    /// The body lands in a uniquely named temporary file first and is renamed
    /// into place, so a partial write never replaces an existing file. The
    /// temporary file is owned by a [`NamedTempFile`] until the rename, so it
    /// is removed on failure and also when this future is dropped mid-write
    /// by a timeout or cancellation.
    pub async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf, ActionError> {
        let target = self.dir.join(file_name);
        let dir = self.dir.clone();
        let prefix = format!(".{file_name}.");

        // A detached blocking task drops its output, and with it the temp file
        let staged = tokio::task::spawn_blocking(move || stage(&dir, &prefix, &bytes))
            .await
            .map_err(io::Error::other)
            .and_then(|staged| staged);

        // Persist synchronously: nothing can cancel between here and the rename
        let saved = staged.and_then(|temp| temp.persist(&target).map_err(|e| e.error));

        match saved {
            Ok(_) => {
                tracing::info!(path = %target.display(), "saved download");
                Ok(target)
            }
            Err(source) => Err(ActionError::Save {
                file: file_name.to_string(),
                source,
            }),
        }
    }
}

fn stage(dir: &Path, prefix: &str, bytes: &[u8]) -> io::Result<NamedTempFile> {
    std::fs::create_dir_all(dir)?;
    let mut temp = Builder::new()
        .prefix(prefix)
        .suffix(".part")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    Ok(temp)
}
