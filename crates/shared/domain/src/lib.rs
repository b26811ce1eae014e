//! # Domain Models
//!
//! Pure `FontHub` types with a single dependency (`serde`).
//! Keep it lean: no I/O, no decoding, no locking. Just data, derived values and the
//! invariants a value can protect on its own.
//!
//! Font groups reference fonts by **name**. The name is the stable key shown to users;
//! [`font::FontId`] is an internal handle used for decoding and rendering only.

pub mod config;
pub mod font;
pub mod group;

/// Minimum number of member fonts a group needs when it is created or edited.
pub const MIN_GROUP_FONTS: usize = 2;

/// Prefix of every generated [`font::FontId`].
pub const FONT_ID_PREFIX: &str = "font-";
