use fhub_domain::font::SourceFile;

/// Family names a decoder reports when the real one is unknown.
const GENERIC_FAMILIES: [&str; 2] = ["serif", "sans-serif"];

/// Picks the display name for an upload.
///
/// The decoded family wins unless it is missing, blank, generic, or looks like one of
/// our own ids (`id_prefix`). Then the file name without its extension is used.
#[must_use]
pub fn resolve_font_name(family: Option<&str>, file: &SourceFile, id_prefix: &str) -> String {
    match family.map(str::trim) {
        Some(name)
            if !name.is_empty()
                && !GENERIC_FAMILIES.contains(&name)
                && !name.starts_with(id_prefix) =>
        {
            name.to_owned()
        },
        _ => file.stem().to_owned(),
    }
}
