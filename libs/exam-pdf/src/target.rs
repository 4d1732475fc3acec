//! Download targets: where finished PDFs are delivered.

use crate::error::{ExportError, Result};
use crate::export::PdfFile;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Destination for generated PDFs.
pub trait DownloadTarget {
    /// Check the capabilities needed to deliver a file.
    ///
    /// A missing capability is reported as
    /// [`ExportError::BrowserUnsupported`] before any rendering starts.
    fn check_support(&self) -> std::result::Result<(), String>;

    /// Deliver a rendered file.
    fn deliver(&self, file: &PdfFile) -> impl Future<Output = Result<()>> + Send;
}

/// Writes files into an existing directory.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadTarget for DirectoryTarget {
    fn check_support(&self) -> std::result::Result<(), String> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(format!("{} is not a directory", self.dir.display()))
        }
    }

    async fn deliver(&self, file: &PdfFile) -> Result<()> {
        let path = self.dir.join(&file.filename);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| ExportError::DownloadFailed(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), bytes = file.bytes.len(), "PDF saved");
        Ok(())
    }
}

/// Keeps delivered files in memory.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    files: Mutex<Vec<PdfFile>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files delivered so far, in delivery order.
    pub fn files(&self) -> Vec<PdfFile> {
        match self.files.lock() {
            Ok(files) => files.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn into_files(self) -> Vec<PdfFile> {
        self.files
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DownloadTarget for MemoryTarget {
    fn check_support(&self) -> std::result::Result<(), String> {
        Ok(())
    }

    async fn deliver(&self, file: &PdfFile) -> Result<()> {
        self.files
            .lock()
            .map_err(|_| ExportError::DownloadFailed("memory target is poisoned".to_string()))?
            .push(file.clone());
        Ok(())
    }
}
