//! Font ingestion feature slice.
//!
//! Turns a dropped or picked file into a registered [`Font`]:
//!
//! 1. extension check (no content sniffing)
//! 2. fresh [`FontId`] and blob handle
//! 3. decode through a [`FontDecoder`] (the only `.await`)
//! 4. display name resolution
//! 5. case-insensitive duplicate check
//! 6. activation on the [`FontSurface`] and atomic registration
//!
//! Every failure after step 2 releases the blob handle before returning.

mod decoder;
mod error;
mod naming;
mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use crate::decoder::{DecodeError, DecodeErrorExt, DecodedFace, FontDecoder, TtfDecoder, parse_face};
pub use crate::error::{IngestError, IngestErrorExt};
pub use crate::naming::resolve_font_name;
pub use crate::surface::{FontSurface, FontdbSurface, SurfaceError, SurfaceErrorExt};
pub use fontdb;

use fhub_domain::config::IngestConfig;
use fhub_domain::font::{BlobUrl, Font, FontId, SourceFile};
use fhub_kernel::generate_font_id;
use fhub_registry::FontRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The ingestion flow, wired to one registry and one rendering surface.
#[derive(Debug)]
pub struct IngestFlow<D = TtfDecoder, S = FontdbSurface> {
    registry: FontRegistry,
    decoder: D,
    surface: Arc<S>,
    config: IngestConfig,
}

impl IngestFlow {
    /// Default flow: `ttf-parser` decoding and a fresh `fontdb` surface.
    #[must_use]
    pub fn with_defaults(registry: FontRegistry, config: IngestConfig) -> Self {
        Self::new(registry, TtfDecoder, Arc::new(FontdbSurface::new()), config)
    }
}

impl<D: FontDecoder, S: FontSurface> IngestFlow<D, S> {
    #[must_use]
    pub const fn new(registry: FontRegistry, decoder: D, surface: Arc<S>, config: IngestConfig) -> Self {
        Self { registry, decoder, surface, config }
    }

    #[must_use]
    pub const fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    #[must_use]
    pub const fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Processes the first file of a batch; the rest are ignored.
    ///
    /// An empty batch is a no-op and yields `Ok(None)`.
    ///
    /// # Errors
    /// See [`IngestFlow::ingest_file`].
    pub async fn ingest(
        &self,
        files: impl IntoIterator<Item = SourceFile>,
    ) -> Result<Option<Font>, IngestError> {
        let mut files = files.into_iter();
        let Some(file) = files.next() else {
            return Ok(None);
        };
        let ignored = files.count();
        if ignored > 0 {
            debug!(ignored, file_name = %file.name(), "Only the first file of a batch is ingested");
        }
        self.ingest_file(file).await.map(Some)
    }

    /// Runs the whole flow for one file and returns the registered font.
    ///
    /// # Errors
    /// * [`IngestError::UnsupportedFileType`] / [`IngestError::FileTooLarge`] before
    ///   anything is allocated.
    /// * [`IngestError::Decode`] when the decoder rejects the bytes.
    /// * [`IngestError::DuplicateName`] when the resolved name is taken, including a
    ///   concurrent upload of the same name winning the race.
    /// * [`IngestError::Surface`] when the face cannot be activated.
    pub async fn ingest_file(&self, file: SourceFile) -> Result<Font, IngestError> {
        self.check_file(&file).inspect_err(|err| {
            warn!(file_name = %file.name(), error = %err, "Upload rejected");
        })?;

        let id = generate_font_id(&self.config.id_prefix);
        let url = self.registry.blobs().create(Arc::clone(file.bytes()));

        let decoded = match self.decoder.decode(Arc::clone(file.bytes())).await {
            Ok(decoded) => decoded,
            Err(err) => {
                self.release(&url);
                warn!(font_id = %id, file_name = %file.name(), error = %err, "Font decoding failed");
                return Err(err.into());
            },
        };

        let name = resolve_font_name(decoded.family.as_deref(), &file, &self.config.id_prefix);
        if self.registry.has_font_named(&name) {
            self.release(&url);
            warn!(font_id = %id, font_name = %name, "Upload rejected: duplicate name");
            return Err(IngestError::DuplicateName { name, context: None });
        }

        if let Err(err) = self.surface.activate(&id, Arc::clone(file.bytes())) {
            self.release(&url);
            return Err(err.into());
        }

        let font = Font { id, name, url, file };
        if let Err(font) = self.registry.try_add_font(font.clone()) {
            self.surface.deactivate(&font.id);
            self.release(&font.url);
            warn!(font_id = %font.id, font_name = %font.name, "Upload lost a race with a font of the same name");
            return Err(IngestError::DuplicateName { name: font.name, context: None });
        }

        info!(
            font_id = %font.id,
            font_name = %font.name,
            glyphs = decoded.glyph_count,
            units_per_em = decoded.units_per_em,
            "font ingested"
        );
        Ok(font)
    }

    /// Deletes a font from the registry and drops its face from the surface.
    pub fn remove_font(&self, id: &FontId) -> Option<Font> {
        let font = self.registry.delete_font(id)?;
        self.surface.deactivate(&font.id);
        Some(font)
    }

    fn check_file(&self, file: &SourceFile) -> Result<(), IngestError> {
        if !file.has_extension(&self.config.extensions) {
            return Err(IngestError::UnsupportedFileType {
                file_name: file.name().to_owned(),
                allowed: allowed_types(&self.config.extensions),
                context: None,
            });
        }

        let size = u64::try_from(file.len()).unwrap_or(u64::MAX);
        if size > self.config.max_file_bytes {
            return Err(IngestError::FileTooLarge {
                size,
                limit: self.config.max_file_bytes,
                context: None,
            });
        }
        Ok(())
    }

    fn release(&self, url: &BlobUrl) {
        self.registry.blobs().revoke(url);
    }
}

/// `["ttf", ".otf"]` reads as `TTF/OTF`.
fn allowed_types(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::minimal_ttf;

    fn flow() -> IngestFlow {
        IngestFlow::with_defaults(FontRegistry::default(), IngestConfig::default())
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let flow = flow();
        assert!(flow.ingest(Vec::new()).await.unwrap().is_none());
        assert!(flow.registry.fonts().is_empty());
    }

    #[tokio::test]
    async fn oversized_files_are_rejected_before_allocation() {
        let config = IngestConfig { max_file_bytes: 16, ..IngestConfig::default() };
        let flow = IngestFlow::with_defaults(FontRegistry::default(), config);

        let err = flow.ingest_file(SourceFile::new("Big.ttf", minimal_ttf("Big"))).await.unwrap_err();
        assert!(matches!(err, IngestError::FileTooLarge { limit: 16, .. }));
        assert!(err.is_rejection());
        assert!(flow.registry.blobs().is_empty());
    }

    #[test]
    fn allowed_types_follow_the_configured_list() {
        assert_eq!(allowed_types(&["ttf".to_owned()]), "TTF");
        assert_eq!(allowed_types(&["ttf".to_owned(), ".otf".to_owned()]), "TTF/OTF");
    }
}
