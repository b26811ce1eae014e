//! Font registry feature slice.
//!
//! Holds every uploaded [`Font`] and every [`FontGroup`] for the lifetime of the
//! process. Each operation takes the write lock once, so readers never observe a half
//! applied change (a font gone but still listed in a group, for instance).
//!
//! The registry does not validate. Name uniqueness for fonts is checked by
//! [`FontRegistry::try_add_font`] only; group rules live in `fhub-groups`. The minimum
//! group size is kept here so deletions can flag groups that fell below it.
//!
//! ```rust
//! use fhub_registry::FontRegistry;
//!
//! let registry = FontRegistry::default();
//! assert!(registry.fonts().is_empty());
//! assert!(!registry.delete_font_group("missing"));
//! ```

mod events;
mod snapshot;

pub use crate::events::{RegistryEvent, RegistryEvents};
pub use crate::snapshot::RegistrySnapshot;

use fhub_domain::MIN_GROUP_FONTS;
use fhub_domain::font::{Font, FontId, names_match};
use fhub_domain::group::FontGroup;
use fhub_kernel::BlobStore;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, trace};

#[derive(Debug, Default)]
struct RegistryState {
    fonts: Vec<Font>,
    groups: Vec<FontGroup>,
}

/// Shared font and font group store.
///
/// Cheap to clone; all clones see the same state.
#[fhub_derive::fhub_slice]
pub struct FontRegistry {
    state: RwLock<RegistryState>,
    blobs: Arc<BlobStore>,
    events: broadcast::Sender<RegistryEvent>,
    min_group_fonts: usize,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::with_blob_store(Arc::new(BlobStore::new()), MIN_GROUP_FONTS)
    }
}

impl FontRegistry {
    /// Creates an empty registry that releases font binaries through `blobs`.
    ///
    /// Groups with fewer than `min_group_fonts` members (never below one) are reported
    /// as incomplete.
    #[must_use]
    pub fn with_blob_store(blobs: Arc<BlobStore>, min_group_fonts: usize) -> Self {
        let (events, _) = broadcast::channel(events::DEFAULT_CAPACITY);
        Self::new(FontRegistryInner {
            state: RwLock::default(),
            blobs,
            events,
            min_group_fonts: min_group_fonts.max(1),
        })
    }

    /// Minimum member count of a complete group.
    #[must_use]
    pub fn min_group_fonts(&self) -> usize {
        self.min_group_fonts
    }

    /// The blob store that owns the binaries behind every [`Font::url`].
    #[must_use]
    pub fn blobs(&self) -> &Arc<BlobStore> {
        &self.blobs
    }

    /// Subscribes to committed changes.
    #[must_use]
    pub fn subscribe(&self) -> RegistryEvents {
        RegistryEvents::new(self.events.subscribe())
    }

    // --- Fonts ---

    /// Appends a font without any uniqueness check.
    pub fn add_font(&self, font: Font) {
        let (id, name) = (font.id.clone(), font.name.clone());
        let total = {
            let mut state = self.state.write();
            state.fonts.push(font);
            self.emit(RegistryEvent::FontAdded { id: id.clone(), name: name.clone() });
            state.fonts.len()
        };
        info!(font_id = %id, font_name = %name, total, "font registered");
    }

    /// Appends `font` unless a font with the same case-insensitive name is registered.
    ///
    /// Check and insert happen under one write lock.
    ///
    /// # Errors
    /// Hands the font back untouched on a name collision.
    pub fn try_add_font(&self, font: Font) -> Result<(), Font> {
        let (id, name) = (font.id.clone(), font.name.clone());
        let total = {
            let mut state = self.state.write();
            if state.fonts.iter().any(|f| f.is_named(&name)) {
                return Err(font);
            }
            state.fonts.push(font);
            self.emit(RegistryEvent::FontAdded { id: id.clone(), name: name.clone() });
            state.fonts.len()
        };
        info!(font_id = %id, font_name = %name, total, "font registered");
        Ok(())
    }

    /// Removes a font, releases its blob handle and drops its name from every group.
    ///
    /// Groups are never removed here, even when they fall below the minimum size.
    /// Returns the removed font, or `None` if `id` is unknown.
    ///
    /// A face activated on a rendering surface stays active: callers that own a surface
    /// delete through `fhub_ingest::IngestFlow::remove_font` (or `FontHub::delete_font`)
    /// so the preview goes away with the font.
    pub fn delete_font(&self, id: &FontId) -> Option<Font> {
        let (font, pruned) = {
            let mut state = self.state.write();
            let Some(position) = state.fonts.iter().position(|f| &f.id == id) else {
                debug!(font_id = %id, "Delete skipped: font not registered");
                return None;
            };
            let font = state.fonts.remove(position);
            self.blobs.revoke(&font.url);

            let mut pruned = Vec::new();
            let mut incomplete = Vec::new();
            for group in &mut state.groups {
                if group.remove_font(&font.name) {
                    pruned.push(group.name().to_owned());
                    if !group.is_complete(self.min_group_fonts) {
                        incomplete.push(group.name().to_owned());
                    }
                }
            }

            self.emit(RegistryEvent::FontDeleted { id: font.id.clone(), name: font.name.clone() });
            let pruned_count = pruned.len();
            if pruned_count > 0 {
                self.emit(RegistryEvent::GroupsPruned {
                    font_name: font.name.clone(),
                    groups: pruned,
                    incomplete,
                });
            }
            (font, pruned_count)
        };

        info!(font_id = %font.id, font_name = %font.name, groups = pruned, "font deleted");
        Some(font)
    }

    /// All fonts in insertion order.
    #[must_use]
    pub fn fonts(&self) -> Vec<Font> {
        self.state.read().fonts.clone()
    }

    #[must_use]
    pub fn font(&self, id: &FontId) -> Option<Font> {
        self.state.read().fonts.iter().find(|f| &f.id == id).cloned()
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn font_by_name(&self, name: &str) -> Option<Font> {
        self.state.read().fonts.iter().find(|f| f.is_named(name)).cloned()
    }

    #[must_use]
    pub fn has_font_named(&self, name: &str) -> bool {
        self.state.read().fonts.iter().any(|f| names_match(&f.name, name))
    }

    #[must_use]
    pub fn font_count(&self) -> usize {
        self.state.read().fonts.len()
    }

    // --- Groups ---

    /// Appends a group. Validation happens upstream.
    pub fn add_font_group(&self, group: FontGroup) {
        let name = group.name().to_owned();
        {
            let mut state = self.state.write();
            state.groups.push(group);
            self.emit(RegistryEvent::GroupAdded { name: name.clone() });
        }
        info!(group = %name, "font group added");
    }

    /// Removes the group called `name`. Returns `false` if there is none.
    pub fn delete_font_group(&self, name: &str) -> bool {
        let removed = {
            let mut state = self.state.write();
            let before = state.groups.len();
            state.groups.retain(|g| g.name() != name);
            let removed = state.groups.len() != before;
            if removed {
                self.emit(RegistryEvent::GroupDeleted { name: name.to_owned() });
            }
            removed
        };

        if removed {
            info!(group = %name, "font group deleted");
        } else {
            debug!(group = %name, "Delete skipped: group not found");
        }
        removed
    }

    /// Replaces the group called `old_name` in place, keeping its position.
    ///
    /// Returns `false` if there is no such group. No uniqueness check.
    pub fn update_font_group(&self, old_name: &str, group: FontGroup) -> bool {
        let name = group.name().to_owned();
        let updated = {
            let mut state = self.state.write();
            let updated =
                state.groups.iter_mut().find(|g| g.name() == old_name).map(|slot| *slot = group).is_some();
            if updated {
                self.emit(RegistryEvent::GroupUpdated {
                    old_name: old_name.to_owned(),
                    name: name.clone(),
                });
            }
            updated
        };

        if updated {
            info!(group = %name, old_name = %old_name, "font group updated");
        } else {
            debug!(group = %old_name, "Update skipped: group not found");
        }
        updated
    }

    /// All groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> Vec<FontGroup> {
        self.state.read().groups.clone()
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<FontGroup> {
        self.state.read().groups.iter().find(|g| g.name() == name).cloned()
    }

    #[must_use]
    pub fn has_group_named(&self, name: &str) -> bool {
        self.state.read().groups.iter().any(|g| g.name() == name)
    }

    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.read();
        RegistrySnapshot {
            fonts: state.fonts.clone(),
            font_groups: state.groups.clone(),
            min_group_fonts: self.min_group_fonts,
        }
    }

    /// Called with the write lock held so the feed follows commit order.
    fn emit(&self, event: RegistryEvent) {
        // No subscribers is the common case.
        let receivers = self.events.send(event).unwrap_or(0);
        trace!(receivers, "registry event dispatched");
    }
}
