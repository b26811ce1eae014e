use crate::GroupFlow;
use crate::error::GroupError;
use crate::validate::Selection;
use fhub_domain::group::FontGroup;

/// State of the "create font group" form.
///
/// Starts with one blank row. A successful [`GroupForm::submit`] resets it; a failed one
/// keeps the input and stores the message in [`GroupForm::error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupForm {
    name: String,
    rows: Vec<Selection>,
    error: Option<String>,
}

impl Default for GroupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupForm {
    #[must_use]
    pub fn new() -> Self {
        Self { name: String::new(), rows: vec![Selection::default()], error: None }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn rows(&self) -> &[Selection] {
        &self.rows
    }

    pub fn add_row(&mut self) {
        self.rows.push(Selection::default());
    }

    /// Removes a row. Out of range indices are ignored.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.rows.remove(index);
            true
        } else {
            false
        }
    }

    /// Sets the custom label of a row.
    pub fn set_label(&mut self, index: usize, label: impl Into<String>) -> bool {
        self.rows.get_mut(index).map(|row| row.label = label.into()).is_some()
    }

    /// Picks the font of a row; an empty string clears it.
    pub fn select_font(&mut self, index: usize, font: impl Into<String>) -> bool {
        self.rows.get_mut(index).map(|row| row.font = font.into()).is_some()
    }

    /// Message of the last failed submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the form, adds the group and resets the form.
    ///
    /// # Errors
    /// The [`GroupError`] from [`GroupFlow::create`]; the form keeps its input.
    pub fn submit(&mut self, flow: &GroupFlow) -> Result<FontGroup, GroupError> {
        self.error = None;
        match flow.create(&self.name, &self.rows) {
            Ok(group) => {
                self.reset();
                Ok(group)
            },
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            },
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_can_be_added_edited_and_removed() {
        let mut form = GroupForm::new();
        form.add_row();
        assert!(form.select_font(1, "Georgia"));
        assert!(form.set_label(1, "Body"));
        assert!(!form.select_font(5, "Arial"));

        assert_eq!(form.rows()[1], Selection::new("Georgia", "Body"));
        assert!(form.remove_row(0));
        assert_eq!(form.rows().len(), 1);
        assert!(!form.remove_row(3));
    }
}
