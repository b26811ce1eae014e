use fhub_domain::font::FontId;
use fontdb::{Database, Family, FaceInfo, Language, Query, Source, Stretch, Style, Weight};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Rendering surface failures.
#[fhub_derive::fhub_error]
pub enum SurfaceError {
    #[error("face {font_id} is already active{}", format_context(.context))]
    AlreadyActive { font_id: String, context: Option<Cow<'static, str>> },
}

/// Where decoded faces become usable for previews.
///
/// Faces are keyed by [`FontId`], so a preview asks for the face by id and never by the
/// user-visible name.
pub trait FontSurface: Send + Sync {
    /// Makes `data` available under `id`.
    ///
    /// # Errors
    /// Implementation specific; the flow releases the blob and reports the error.
    fn activate(&self, id: &FontId, data: Arc<[u8]>) -> Result<(), SurfaceError>;

    /// Removes the face. Returns `false` if `id` was not active.
    fn deactivate(&self, id: &FontId) -> bool;

    fn contains(&self, id: &FontId) -> bool;
}

struct SurfaceState {
    db: Database,
    faces: FxHashMap<FontId, fontdb::ID>,
}

/// [`FontSurface`] backed by an in-memory `fontdb` database.
///
/// Each face is pushed with its [`FontId`] as the only family name, regardless of what
/// its `name` table says.
pub struct FontdbSurface {
    state: RwLock<SurfaceState>,
}

impl Default for FontdbSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FontdbSurface {
    #[must_use]
    pub fn new() -> Self {
        let state = SurfaceState { db: Database::new(), faces: FxHashMap::default() };
        Self { state: RwLock::new(state) }
    }

    /// Number of active faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().faces.is_empty()
    }

    /// Looks the face up the way a renderer would: by family, with `id` as the family.
    #[must_use]
    pub fn resolve(&self, id: &FontId) -> Option<fontdb::ID> {
        let families = [Family::Name(id.as_str())];
        self.state.read().db.query(&Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        })
    }

    /// Runs `f` with the face bytes and face index, for preview rendering.
    pub fn with_face_data<R>(&self, id: &FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        let state = self.state.read();
        let face = *state.faces.get(id)?;
        state.db.with_face_data(face, f)
    }
}

impl FontSurface for FontdbSurface {
    fn activate(&self, id: &FontId, data: Arc<[u8]>) -> Result<(), SurfaceError> {
        let mut state = self.state.write();
        if state.faces.contains_key(id) {
            return Err(SurfaceError::AlreadyActive { font_id: id.to_string(), context: None });
        }

        let source: Arc<dyn AsRef<[u8]> + Send + Sync> = Arc::new(data);
        let face = state.db.push_face_info(FaceInfo {
            id: fontdb::ID::dummy(),
            source: Source::Binary(source),
            index: 0,
            families: vec![(id.to_string(), Language::English_UnitedStates)],
            post_script_name: id.to_string(),
            style: Style::Normal,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            monospaced: false,
        });
        state.faces.insert(id.clone(), face);
        trace!(font_id = %id, active = state.faces.len(), "face activated");
        Ok(())
    }

    fn deactivate(&self, id: &FontId) -> bool {
        let mut state = self.state.write();
        let Some(face) = state.faces.remove(id) else {
            debug!(font_id = %id, "Deactivate skipped: face not active");
            return false;
        };
        state.db.remove_face(face);
        trace!(font_id = %id, "face deactivated");
        true
    }

    fn contains(&self, id: &FontId) -> bool {
        self.state.read().faces.contains_key(id)
    }
}

impl fmt::Debug for FontdbSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontdbSurface").field("faces", &self.len()).finish()
    }
}
