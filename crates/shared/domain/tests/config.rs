use fhub_domain::config::{FontHubConfig, IngestConfig, LoggerSettings};
use fhub_domain::group::FontGroup;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let ingest = IngestConfig::default();
    assert_eq!(ingest.extensions, vec!["ttf".to_owned()]);
    assert_eq!(ingest.max_file_bytes, 32 * 1024 * 1024);
    assert_eq!(ingest.id_prefix, "font-");

    let logger = LoggerSettings::default();
    assert_eq!(logger.level, "info");
    assert!(logger.console);
    assert!(logger.path.is_none());

    let cfg = FontHubConfig::default();
    assert_eq!(cfg.groups.min_fonts, 2);
    assert!(cfg.preload.dir.is_none());
}

#[test]
fn fonthub_config_deserializes_partial_documents() {
    let raw = json!({
        "ingest": { "extensions": ["ttf", "otf"] },
        "logger": { "level": "debug", "json": true },
        "preload": { "dir": "/usr/share/fonts/truetype" }
    });

    let cfg: FontHubConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.ingest.extensions.len(), 2);
    assert_eq!(cfg.ingest.max_file_bytes, 32 * 1024 * 1024);
    assert_eq!(cfg.logger.level, "debug");
    assert!(cfg.logger.json);
    assert_eq!(cfg.preload.dir, Some(std::path::PathBuf::from("/usr/share/fonts/truetype")));
}

#[test]
fn config_clones_are_copy_on_write() {
    let base = FontHubConfig::default();
    let mut tuned = base.clone();
    tuned.ingest.max_file_bytes = 1024;

    assert_eq!(base.ingest.max_file_bytes, 32 * 1024 * 1024);
    assert_eq!(tuned.ingest.max_file_bytes, 1024);
}

#[test]
fn group_serializes_derived_count() {
    let group: FontGroup = serde_json::from_value(json!({
        "name": "Body",
        "fonts": ["Arial", "Georgia"],
        "fontNames": { "Arial": "Heading" },
        "count": 99
    }))
    .expect("group deserialize");

    assert_eq!(group.count(), 2);
    let value = serde_json::to_value(&group).expect("group serialize");
    assert_eq!(value["count"], 2);
    assert_eq!(value["fontNames"]["Arial"], "Heading");
}
