//! Facade crate for `FontHub` features and shared modules.
//! Re-exports domain/kernel primitives and composes the feature slices once.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use fhub::FontHub;
//! use fhub::domain::config::FontHubConfig;
//!
//! let hub = FontHub::builder().config(FontHubConfig::default()).build();
//! assert!(hub.ingest(Vec::new()).await.unwrap().is_none());
//! # }
//! ```

mod error;
mod preload;

pub use crate::error::{FontHubError, FontHubErrorExt};
pub use crate::preload::PreloadReport;
pub use fhub_domain as domain;
pub use fhub_groups as groups;
pub use fhub_ingest as ingest;
pub use fhub_kernel as kernel;
pub use fhub_registry as registry;

use fhub_domain::config::FontHubConfig;
use fhub_domain::font::{Font, FontId, SourceFile};
use fhub_domain::group::FontGroup;
use fhub_groups::{GroupEditor, GroupError, GroupFlow, GroupForm, Selection};
use fhub_ingest::{FontdbSurface, IngestError, IngestFlow, TtfDecoder};
use fhub_kernel::BlobStore;
use fhub_registry::{FontRegistry, RegistryEvents, RegistrySnapshot};
use std::sync::Arc;
use tracing::info;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "registry",
        "ingest",
        "groups",
        #[cfg(feature = "testing")]
        "testing",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The composed application state: one registry, one ingestion flow, one group flow.
///
/// Cheap to clone; clones share everything.
#[fhub_derive::fhub_slice]
pub struct FontHub {
    config: FontHubConfig,
    registry: FontRegistry,
    ingest: IngestFlow<TtfDecoder, FontdbSurface>,
    groups: GroupFlow,
}

/// Wires a [`FontHub`] from configuration and optional collaborators.
#[derive(Debug, Default)]
pub struct FontHubBuilder {
    config: FontHubConfig,
    blobs: Option<Arc<BlobStore>>,
    surface: Option<Arc<FontdbSurface>>,
}

impl FontHubBuilder {
    #[must_use]
    pub fn config(mut self, config: FontHubConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares an existing blob store instead of creating one.
    #[must_use]
    pub fn blob_store(mut self, blobs: Arc<BlobStore>) -> Self {
        self.blobs = Some(blobs);
        self
    }

    /// Shares an existing rendering surface instead of creating one.
    #[must_use]
    pub fn surface(mut self, surface: Arc<FontdbSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn build(self) -> FontHub {
        let Self { config, blobs, surface } = self;
        let registry =
            FontRegistry::with_blob_store(blobs.unwrap_or_default(), config.groups.min_fonts);
        let surface = surface.unwrap_or_default();
        let ingest =
            IngestFlow::new(registry.clone(), TtfDecoder, surface, config.ingest.clone());
        let groups = GroupFlow::new(registry.clone());

        info!(
            extensions = ?config.ingest.extensions,
            min_group_fonts = groups.min_fonts(),
            "FontHub initialized"
        );
        FontHub::new(FontHubInner { config, registry, ingest, groups })
    }
}

impl FontHub {
    #[must_use]
    pub fn builder() -> FontHubBuilder {
        FontHubBuilder::default()
    }

    #[must_use]
    pub fn config(&self) -> &FontHubConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    #[must_use]
    pub fn group_flow(&self) -> &GroupFlow {
        &self.groups
    }

    // --- Fonts ---

    /// Ingests the first file of a dropped or picked batch.
    ///
    /// # Errors
    /// The user-facing [`IngestError`].
    pub async fn ingest(
        &self,
        files: impl IntoIterator<Item = SourceFile>,
    ) -> Result<Option<Font>, IngestError> {
        self.ingest.ingest(files).await
    }

    /// # Errors
    /// The user-facing [`IngestError`].
    pub async fn ingest_file(&self, file: SourceFile) -> Result<Font, IngestError> {
        self.ingest.ingest_file(file).await
    }

    /// Deletes a font, prunes it from groups and drops its preview face.
    pub fn delete_font(&self, id: &FontId) -> Option<Font> {
        self.ingest.remove_font(id)
    }

    #[must_use]
    pub fn fonts(&self) -> Vec<Font> {
        self.registry.fonts()
    }

    /// Preview lookup: the face registered under the font's id.
    #[must_use]
    pub fn preview_face(&self, id: &FontId) -> Option<fhub_ingest::fontdb::ID> {
        self.ingest.surface().resolve(id)
    }

    #[must_use]
    pub fn surface(&self) -> &Arc<FontdbSurface> {
        self.ingest.surface()
    }

    // --- Groups ---

    /// # Errors
    /// The user-facing [`GroupError`].
    pub fn create_group(&self, name: &str, selections: &[Selection]) -> Result<FontGroup, GroupError> {
        self.groups.create(name, selections)
    }

    /// Submits a creation form; see [`GroupForm::submit`].
    ///
    /// # Errors
    /// The user-facing [`GroupError`].
    pub fn submit_form(&self, form: &mut GroupForm) -> Result<FontGroup, GroupError> {
        form.submit(&self.groups)
    }

    #[must_use]
    pub fn edit_group(&self, name: &str) -> Option<GroupEditor> {
        self.groups.edit(name)
    }

    /// Saves an edit dialog; see [`GroupEditor::save`].
    ///
    /// # Errors
    /// The user-facing [`GroupError`].
    pub fn save_group(&self, editor: &GroupEditor) -> Result<FontGroup, GroupError> {
        editor.save(&self.groups)
    }

    pub fn delete_group(&self, name: &str) -> bool {
        self.groups.delete(name)
    }

    #[must_use]
    pub fn groups(&self) -> Vec<FontGroup> {
        self.registry.groups()
    }

    // --- Observation ---

    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> RegistryEvents {
        self.registry.subscribe()
    }
}
