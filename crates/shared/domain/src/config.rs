use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level `FontHub` configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontHubConfigInner {
    pub ingest: IngestConfig,
    pub groups: GroupsConfig,
    pub logger: LoggerSettings,
    pub preload: PreloadConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct FontHubConfig {
    #[serde(flatten, default)]
    inner: Arc<FontHubConfigInner>,
}

impl Deref for FontHubConfig {
    type Target = FontHubConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for FontHubConfig {
    fn deref_mut(&mut self) -> &mut FontHubConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Upload acceptance rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Accepted file extensions, without the dot, compared case-insensitively.
    pub extensions: Vec<String>,
    pub max_file_bytes: u64,
    pub id_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    pub min_fonts: usize,
}

/// Settings handed to `fhub-logger` by the shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub filter: Option<String>,
}

/// Directory whose fonts are ingested at startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    pub dir: Option<PathBuf>,
}

// --- Default ---

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["ttf".to_owned()],
            max_file_bytes: 32 * 1024 * 1024,
            id_prefix: crate::FONT_ID_PREFIX.to_owned(),
        }
    }
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self { min_fonts: crate::MIN_GROUP_FONTS }
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, path: None, json: false, filter: None }
    }
}
