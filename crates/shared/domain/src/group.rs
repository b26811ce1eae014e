use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named set of fonts with optional per-member display labels.
///
/// Members are font **names**. `count` is never stored: it is `fonts().len()` on every
/// read and is only materialized when serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupRecord", into = "GroupRecord")]
pub struct FontGroup {
    name: String,
    fonts: Vec<String>,
    font_names: BTreeMap<String, String>,
}

impl FontGroup {
    /// Builds a group as-is. Size and uniqueness rules are enforced by the group flow.
    pub fn new(
        name: impl Into<String>,
        fonts: Vec<String>,
        font_names: BTreeMap<String, String>,
    ) -> Self {
        Self { name: name.into(), fonts, font_names }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    #[must_use]
    pub const fn font_names(&self) -> &BTreeMap<String, String> {
        &self.font_names
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.fonts.len()
    }

    #[must_use]
    pub fn contains(&self, font_name: &str) -> bool {
        self.fonts.iter().any(|f| f == font_name)
    }

    /// Custom label for a member, or the font name itself.
    #[must_use]
    pub fn label_for<'a>(&'a self, font_name: &'a str) -> &'a str {
        self.font_names
            .get(font_name)
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(font_name)
    }

    /// Display labels of all members, in member order.
    pub fn member_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.fonts.iter().map(|f| self.label_for(f))
    }

    /// Member labels joined for a listing row, e.g. `"Heading, Georgia"`.
    #[must_use]
    pub fn joined_labels(&self) -> String {
        self.member_labels().collect::<Vec<_>>().join(", ")
    }

    /// `false` once deletions pruned the group below `min_fonts` members.
    #[must_use]
    pub fn is_complete(&self, min_fonts: usize) -> bool {
        self.count() >= min_fonts
    }

    /// Drops a member and its label. Returns `true` if the font was a member.
    pub fn remove_font(&mut self, font_name: &str) -> bool {
        let before = self.fonts.len();
        self.fonts.retain(|f| f != font_name);
        let removed = self.fonts.len() != before;
        if removed {
            self.font_names.remove(font_name);
        }
        removed
    }
}

/// Wire shape of a [`FontGroup`], including the derived `count`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupRecord {
    name: String,
    fonts: Vec<String>,
    #[serde(default)]
    font_names: BTreeMap<String, String>,
    #[serde(default)]
    count: usize,
}

impl From<GroupRecord> for FontGroup {
    fn from(record: GroupRecord) -> Self {
        Self::new(record.name, record.fonts, record.font_names)
    }
}

impl From<FontGroup> for GroupRecord {
    fn from(group: FontGroup) -> Self {
        let count = group.count();
        Self { name: group.name, fonts: group.fonts, font_names: group.font_names, count }
    }
}
