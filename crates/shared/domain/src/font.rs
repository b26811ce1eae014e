use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Process-unique opaque font identifier, shaped `font-<millis>-<suffix>`.
///
/// Used as the rendering family key; never shown to users.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(String);

impl FontId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FontId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Handle to a font binary held by the blob store (`blob:fonthub/<key>`).
///
/// Must be released exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobUrl(String);

impl BlobUrl {
    pub const SCHEME: &'static str = "blob:fonthub/";

    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self(format!("{}{key}", Self::SCHEME))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The store key, without the scheme.
    #[must_use]
    pub fn key(&self) -> &str {
        self.0.strip_prefix(Self::SCHEME).unwrap_or(&self.0)
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The file a user picked or dropped: its name and raw bytes.
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    bytes: Arc<[u8]>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the file name ends in `.<ext>` for any of `extensions`,
    /// ignoring ASCII case. Extensions are given without the dot. Only the name is
    /// inspected, never the content.
    #[must_use]
    pub fn has_extension<S: AsRef<str>>(&self, extensions: &[S]) -> bool {
        let name = self.name.to_ascii_lowercase();
        extensions.iter().any(|ext| {
            let suffix = format!(".{}", ext.as_ref().trim_start_matches('.').to_ascii_lowercase());
            name.ends_with(&suffix)
        })
    }

    /// The part after the last dot, if there is a non-empty stem before it.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// The file name with its last extension removed.
    #[must_use]
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile").field("name", &self.name).field("len", &self.len()).finish()
    }
}

impl Serialize for SourceFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SourceFile", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("size", &self.len())?;
        state.end()
    }
}

/// A registered font.
///
/// Created by the ingestion flow only; `name` is unique (case-insensitive) in a registry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub id: FontId,
    pub name: String,
    pub url: BlobUrl,
    pub file: SourceFile,
}

impl Font {
    /// Case-insensitive name comparison, the rule used for uniqueness.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// The single name-equality rule for fonts.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_checks_ignore_case() {
        let file = SourceFile::new("Arial.TTF", vec![0u8; 4]);
        assert!(file.has_extension(&["ttf"]));
        assert!(!file.has_extension(&["otf"]));
        assert_eq!(file.stem(), "Arial");
    }

    #[test]
    fn dotfiles_and_bare_names_have_no_extension() {
        assert!(SourceFile::new(".ttf", Vec::<u8>::new()).extension().is_none());
        assert!(!SourceFile::new("ttf", Vec::<u8>::new()).has_extension(&["ttf"]));
        assert!(SourceFile::new("Font.tar.TTF", Vec::<u8>::new()).has_extension(&[".ttf"]));
        assert!(SourceFile::new("ttf", Vec::<u8>::new()).extension().is_none());
        assert_eq!(SourceFile::new("My.Font.ttf", Vec::<u8>::new()).stem(), "My.Font");
    }

    #[test]
    fn blob_url_round_trips_its_key() {
        let url = BlobUrl::from_key("abc");
        assert_eq!(url.as_str(), "blob:fonthub/abc");
        assert_eq!(url.key(), "abc");
    }

    #[test]
    fn names_match_is_case_insensitive() {
        assert!(names_match("Georgia", "GEORGIA"));
        assert!(!names_match("Georgia", "Georgia Pro"));
    }

    #[test]
    fn source_file_debug_hides_bytes() {
        let file = SourceFile::new("a.ttf", vec![1u8, 2, 3]);
        assert_eq!(format!("{file:?}"), "SourceFile { name: \"a.ttf\", len: 3 }");
    }
}
