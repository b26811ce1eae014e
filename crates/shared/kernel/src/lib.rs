//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, blob handles and
//! config loading.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use fhub_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! Font ids add a millisecond timestamp in front of the random suffix:
//! ```rust
//! let id = fhub_kernel::generate_font_id("font-");
//! assert!(id.as_str().starts_with("font-"));
//! ```
pub mod blob;
pub mod config;

use fhub_domain::font::FontId;
use std::time::{SystemTime, UNIX_EPOCH};

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Length of the random part of a generated [`FontId`].
pub const FONT_ID_SUFFIX_LEN: usize = 9;

pub use blob::BlobStore;
pub use fhub_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}

/// Creates a fresh `<prefix><unix-millis>-<suffix>` font id.
#[must_use]
pub fn generate_font_id(prefix: &str) -> FontId {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_millis());
    FontId::new(format!("{prefix}{millis}-{}", safe_nanoid!(FONT_ID_SUFFIX_LEN)))
}
