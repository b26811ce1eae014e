#![allow(dead_code, unreachable_pub)]

use fhub_domain::font::{Font, FontId, SourceFile};
use fhub_domain::group::FontGroup;
use fhub_registry::FontRegistry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registers a font the way the ingestion flow would: blob first, then the record.
pub fn font(registry: &FontRegistry, name: &str) -> Font {
    let bytes: Arc<[u8]> = Arc::from(name.as_bytes());
    Font {
        id: FontId::new(format!("font-0-{name}")),
        name: name.to_owned(),
        url: registry.blobs().create(Arc::clone(&bytes)),
        file: SourceFile::new(format!("{name}.ttf"), bytes),
    }
}

pub fn group(name: &str, members: &[&str]) -> FontGroup {
    FontGroup::new(name, members.iter().map(|m| (*m).to_owned()).collect(), BTreeMap::new())
}
