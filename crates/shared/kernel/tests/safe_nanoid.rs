use fhub_kernel::{FONT_ID_SUFFIX_LEN, SAFE_ALPHABET, generate_font_id, safe_nanoid};

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn font_ids_carry_prefix_timestamp_and_suffix() {
    let id = generate_font_id("font-");
    let rest = id.as_str().strip_prefix("font-").expect("prefix");
    let (millis, suffix) = rest.split_once('-').expect("timestamp separator");

    assert!(millis.parse::<u128>().is_ok());
    assert_eq!(suffix.len(), FONT_ID_SUFFIX_LEN);
    assert!(suffix.chars().all(|ch| SAFE_ALPHABET.contains(&ch)));
}

#[test]
fn font_ids_are_unique() {
    let ids: std::collections::HashSet<_> = (0..256).map(|_| generate_font_id("font-")).collect();
    assert_eq!(ids.len(), 256);
}
