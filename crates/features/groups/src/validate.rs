use crate::error::GroupError;
use fhub_domain::group::FontGroup;
use std::collections::BTreeMap;

/// One picked font and its optional display label.
///
/// A row of the creation form, or a member of the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub font: String,
}

impl Selection {
    pub fn new(font: impl Into<String>, label: impl Into<String>) -> Self {
        Self { label: label.into(), font: font.into() }
    }

    /// A row with no font picked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font.trim().is_empty()
    }
}

/// The rule shared by group creation and editing.
///
/// * `name` must be non-blank; it is stored trimmed.
/// * Rows without a font are dropped. A font picked twice counts once; its first
///   non-blank label wins.
/// * At least `min_fonts` members must remain.
/// * Blank labels fall back to the font name.
///
/// Registry lookups (unknown fonts, taken names) are the caller's job.
///
/// # Errors
/// [`GroupError::NameRequired`] or [`GroupError::TooFewFonts`], checked in that order.
pub fn validate_group(
    name: &str,
    selections: &[Selection],
    min_fonts: usize,
) -> Result<FontGroup, GroupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GroupError::NameRequired { context: None });
    }

    let mut fonts: Vec<String> = Vec::with_capacity(selections.len());
    let mut labels: BTreeMap<String, String> = BTreeMap::new();
    for selection in selections.iter().filter(|s| !s.is_empty()) {
        let font = selection.font.trim();
        let label = selection.label.trim();
        if !fonts.iter().any(|f| f == font) {
            fonts.push(font.to_owned());
        }
        if !label.is_empty() {
            labels.entry(font.to_owned()).or_insert_with(|| label.to_owned());
        }
    }

    if fonts.len() < min_fonts {
        return Err(GroupError::TooFewFonts { min: min_fonts, selected: fonts.len(), context: None });
    }

    for font in &fonts {
        labels.entry(font.clone()).or_insert_with(|| font.clone());
    }

    Ok(FontGroup::new(name, fonts, labels))
}
