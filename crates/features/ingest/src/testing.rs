//! In-memory TrueType fixtures.
//!
//! Builds the smallest sfnt that both `ttf-parser` and `fontdb` accept: `head`, `hhea`,
//! `maxp` (one glyph) and a Windows Unicode `name` table.

use ttf_parser::name_id;

const WINDOWS: u16 = 3;
const UNICODE_BMP: u16 = 1;
const ENGLISH_US: u16 = 0x0409;

/// A font whose legacy family is `family`.
#[must_use]
pub fn minimal_ttf(family: &str) -> Vec<u8> {
    let postscript: String = family.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let postscript = if postscript.is_empty() { "Untitled".to_owned() } else { postscript };
    ttf_with_names(&[
        (name_id::FAMILY, family),
        (name_id::SUBFAMILY, "Regular"),
        (name_id::POST_SCRIPT_NAME, &postscript),
    ])
}

/// A font with exactly the given `name` records.
#[must_use]
pub fn ttf_with_names(names: &[(u16, &str)]) -> Vec<u8> {
    // Sorted by tag; lookups binary search the directory.
    let tables: [(&[u8; 4], Vec<u8>); 4] = [
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"maxp", maxp_table()),
        (b"name", name_table(names)),
    ];

    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    push_u16(&mut out, 4); // numTables
    push_u16(&mut out, 64); // searchRange
    push_u16(&mut out, 2); // entrySelector
    push_u16(&mut out, 0); // rangeShift

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        out.extend_from_slice(*tag);
        out.extend_from_slice(&0u32.to_be_bytes());
        push_u32(&mut out, offset);
        push_u32(&mut out, data.len());
        offset += padded(data.len());
    }
    for (_, data) in &tables {
        out.extend_from_slice(data);
        out.resize(padded(out.len()), 0);
    }
    out
}

fn head_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
    t.extend_from_slice(&0u32.to_be_bytes()); // checkSumAdjustment
    t.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, 1000); // unitsPerEm
    t.extend_from_slice(&[0; 16]); // created, modified
    t.extend_from_slice(&[0; 8]); // xMin, yMin, xMax, yMax
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_u16(&mut t, 2); // fontDirectionHint
    push_u16(&mut t, 0); // indexToLocFormat
    push_u16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(36);
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    push_u16(&mut t, 800); // ascender
    push_u16(&mut t, 0xFF38); // descender (-200)
    t.resize(34, 0);
    push_u16(&mut t, 0); // numberOfHMetrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    t.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    push_u16(&mut t, 1); // numGlyphs
    t
}

fn name_table(names: &[(u16, &str)]) -> Vec<u8> {
    let encoded: Vec<(u16, Vec<u8>)> = names
        .iter()
        .map(|(id, value)| (*id, value.encode_utf16().flat_map(u16::to_be_bytes).collect()))
        .collect();

    let mut t = Vec::new();
    push_u16(&mut t, 0); // format
    push_u16(&mut t, encoded.len());
    push_u16(&mut t, 6 + 12 * encoded.len()); // stringOffset

    let mut string_offset = 0;
    for (id, bytes) in &encoded {
        push_u16(&mut t, WINDOWS);
        push_u16(&mut t, UNICODE_BMP);
        push_u16(&mut t, ENGLISH_US);
        push_u16(&mut t, *id);
        push_u16(&mut t, bytes.len());
        push_u16(&mut t, string_offset);
        string_offset += bytes.len();
    }
    for (_, bytes) in &encoded {
        t.extend_from_slice(bytes);
    }
    t
}

const fn padded(len: usize) -> usize {
    (len + 3) & !3
}

fn push_u16(out: &mut Vec<u8>, value: impl TryInto<u16>) {
    let value: u16 = value.try_into().unwrap_or(u16::MAX);
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: usize) {
    let value = u32::try_from(value).unwrap_or(u32::MAX);
    out.extend_from_slice(&value.to_be_bytes());
}
