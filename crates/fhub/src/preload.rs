use crate::{FontHub, FontHubError, FontHubErrorExt};
use fhub_domain::font::{Font, SourceFile};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of [`FontHub::preload_dir`].
#[derive(Debug, Default)]
pub struct PreloadReport {
    pub loaded: Vec<Font>,
    pub failed: Vec<(PathBuf, FontHubError)>,
    /// Entries skipped for their extension.
    pub skipped: usize,
}

impl FontHub {
    /// Ingests every accepted font file directly inside `dir`, in file name order.
    ///
    /// Per-file failures (unreadable file, decode error, duplicate name) are collected in
    /// the report and do not stop the run.
    ///
    /// # Errors
    /// [`FontHubError::Io`] if the directory itself cannot be listed.
    pub async fn preload_dir(&self, dir: &Path) -> Result<PreloadReport, FontHubError> {
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .context(format!("Failed to read font directory: {}", dir.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await.is_ok_and(|t| t.is_file()) {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let extensions = &self.config().ingest.extensions;
        let mut report = PreloadReport::default();
        for path in paths {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
                report.skipped += 1;
                continue;
            };
            let probe = SourceFile::new(file_name.as_str(), Vec::<u8>::new());
            if !probe.has_extension(extensions) {
                report.skipped += 1;
                continue;
            }

            let outcome = match tokio::fs::read(&path).await {
                Ok(bytes) => self.ingest_file(SourceFile::new(file_name, bytes)).await.map_err(FontHubError::from),
                Err(err) => Err(FontHubError::from(err)),
            };
            match outcome {
                Ok(font) => report.loaded.push(font),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Preload skipped a font");
                    report.failed.push((path, err));
                },
            }
        }

        info!(
            dir = %dir.display(),
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            skipped = report.skipped,
            "font directory preloaded"
        );
        Ok(report)
    }
}
