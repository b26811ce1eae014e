use fhub_domain::MIN_GROUP_FONTS;
use fhub_domain::font::Font;
use fhub_domain::group::FontGroup;
use serde::Serialize;

/// Point-in-time copy of the registry for presentation layers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    pub fonts: Vec<Font>,
    pub font_groups: Vec<FontGroup>,
    /// The registry's minimum group size at the time of the snapshot.
    #[serde(skip)]
    pub min_group_fonts: usize,
}

impl Default for RegistrySnapshot {
    fn default() -> Self {
        Self { fonts: Vec::new(), font_groups: Vec::new(), min_group_fonts: MIN_GROUP_FONTS }
    }
}

impl RegistrySnapshot {
    /// Names of all fonts, in display order.
    pub fn font_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fonts.iter().map(|f| f.name.as_str())
    }

    /// Groups pruned below the minimum size by font deletions.
    pub fn incomplete_groups(&self) -> impl Iterator<Item = &FontGroup> + '_ {
        self.font_groups.iter().filter(|g| !g.is_complete(self.min_group_fonts))
    }
}
