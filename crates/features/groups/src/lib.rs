//! Font group feature slice.
//!
//! [`validate_group`] is the rule shared by the creation form and the edit dialog.
//! [`GroupFlow`] adds the checks that need the registry (member fonts exist, group name
//! is free) and commits the result. [`GroupForm`] and [`GroupEditor`] hold the state a
//! presentation layer binds its inputs to.

mod editor;
mod error;
mod form;
mod validate;

pub use crate::editor::GroupEditor;
pub use crate::error::{GroupError, GroupErrorExt};
pub use crate::form::GroupForm;
pub use crate::validate::{Selection, validate_group};

use fhub_domain::group::FontGroup;
use fhub_registry::FontRegistry;
use tracing::{debug, info};

/// Creates, edits and deletes font groups against one registry.
#[derive(Debug, Clone)]
pub struct GroupFlow {
    registry: FontRegistry,
    min_fonts: usize,
}

impl GroupFlow {
    /// Flow enforcing the registry's minimum group size.
    #[must_use]
    pub fn new(registry: FontRegistry) -> Self {
        let min_fonts = registry.min_group_fonts();
        Self::with_min_fonts(registry, min_fonts)
    }

    /// Flow with a custom minimum group size (never below one).
    #[must_use]
    pub const fn with_min_fonts(registry: FontRegistry, min_fonts: usize) -> Self {
        let min_fonts = if min_fonts == 0 { 1 } else { min_fonts };
        Self { registry, min_fonts }
    }

    #[must_use]
    pub const fn min_fonts(&self) -> usize {
        self.min_fonts
    }

    /// Validates and appends a new group.
    ///
    /// # Errors
    /// Any [`GroupError`] except `GroupNotFound`; the registry is untouched on error.
    pub fn create(&self, name: &str, selections: &[Selection]) -> Result<FontGroup, GroupError> {
        let group = self.checked(name, selections, None)?;
        self.registry.add_font_group(group.clone());
        info!(group = %group.name(), fonts = group.count(), "font group created");
        Ok(group)
    }

    /// Validates and replaces the group called `old_name`, keeping its position.
    ///
    /// Keeping the current name is not a collision.
    ///
    /// # Errors
    /// Any [`GroupError`]; [`GroupError::GroupNotFound`] if `old_name` vanished meanwhile.
    pub fn update(
        &self,
        old_name: &str,
        name: &str,
        selections: &[Selection],
    ) -> Result<FontGroup, GroupError> {
        let group = self.checked(name, selections, Some(old_name))?;
        if !self.registry.update_font_group(old_name, group.clone()) {
            return Err(GroupError::GroupNotFound { name: old_name.to_owned(), context: None });
        }
        Ok(group)
    }

    /// Removes a group. Returns `false` if there is none.
    pub fn delete(&self, name: &str) -> bool {
        self.registry.delete_font_group(name)
    }

    /// Opens the edit dialog for an existing group.
    #[must_use]
    pub fn edit(&self, name: &str) -> Option<GroupEditor> {
        self.registry.group(name).map(|group| GroupEditor::open(&group, self.min_fonts))
    }

    /// Names that can be picked in a form row, in upload order.
    #[must_use]
    pub fn selectable_fonts(&self) -> Vec<String> {
        self.registry.fonts().into_iter().map(|f| f.name).collect()
    }

    fn checked(
        &self,
        name: &str,
        selections: &[Selection],
        replacing: Option<&str>,
    ) -> Result<FontGroup, GroupError> {
        let group = validate_group(name, selections, self.min_fonts)
            .inspect_err(|err| debug!(group = %name, error = %err, "Group rejected"))?;

        let registered = self.registry.fonts();
        if let Some(missing) =
            group.fonts().iter().find(|member| !registered.iter().any(|f| &f.name == *member))
        {
            return Err(GroupError::UnknownFont { name: missing.clone(), context: None });
        }

        let renamed = replacing.is_none_or(|old| old != group.name());
        if renamed && self.registry.has_group_named(group.name()) {
            return Err(GroupError::DuplicateName { name: group.name().to_owned(), context: None });
        }
        Ok(group)
    }
}
