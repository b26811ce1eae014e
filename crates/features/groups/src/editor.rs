use crate::GroupFlow;
use crate::error::GroupError;
use crate::validate::Selection;
use fhub_domain::group::FontGroup;
use std::collections::BTreeMap;

/// State of the "edit font group" dialog, opened from an existing group.
///
/// Nothing reaches the registry until [`GroupEditor::save`]; dropping the editor is
/// the cancel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEditor {
    original: String,
    name: String,
    fonts: Vec<String>,
    labels: BTreeMap<String, String>,
    min_fonts: usize,
}

impl GroupEditor {
    pub(crate) fn open(group: &FontGroup, min_fonts: usize) -> Self {
        Self {
            original: group.name().to_owned(),
            name: group.name().to_owned(),
            fonts: group.fonts().to_vec(),
            labels: group.font_names().clone(),
            min_fonts,
        }
    }

    /// Name of the group being edited, as stored.
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Selected members, in selection order.
    #[must_use]
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    #[must_use]
    pub fn is_selected(&self, font: &str) -> bool {
        self.fonts.iter().any(|f| f == font)
    }

    /// Deselects a member or appends a new one. Returns the new selection state.
    pub fn toggle_font(&mut self, font: &str) -> bool {
        if self.is_selected(font) {
            self.fonts.retain(|f| f != font);
            false
        } else {
            self.fonts.push(font.to_owned());
            true
        }
    }

    /// Custom label as typed, empty when none.
    #[must_use]
    pub fn label(&self, font: &str) -> &str {
        self.labels.get(font).map_or("", String::as_str)
    }

    pub fn set_label(&mut self, font: &str, label: impl Into<String>) {
        self.labels.insert(font.to_owned(), label.into());
    }

    /// Whether the save action should be enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty() && self.fonts.len() >= self.min_fonts
    }

    /// Validates and replaces the original group.
    ///
    /// # Errors
    /// The [`GroupError`] from [`GroupFlow::update`].
    pub fn save(&self, flow: &GroupFlow) -> Result<FontGroup, GroupError> {
        let selections: Vec<Selection> = self
            .fonts
            .iter()
            .map(|font| Selection::new(font.as_str(), self.label(font)))
            .collect();
        flow.update(&self.original, &self.name, &selections)
    }
}
