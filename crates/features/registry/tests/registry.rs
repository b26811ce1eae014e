mod common;

use common::{font, group};
use fhub_domain::font::FontId;
use fhub_kernel::BlobStore;
use fhub_registry::{FontRegistry, RegistryEvent};
use std::sync::Arc;

#[test]
fn scenario_body_group_survives_font_deletion() {
    let registry = FontRegistry::default();
    let arial = font(&registry, "Arial");
    let georgia = font(&registry, "Georgia");
    let arial_id = arial.id.clone();
    registry.try_add_font(arial).unwrap();
    registry.try_add_font(georgia).unwrap();
    registry.add_font_group(group("Body", &["Arial", "Georgia"]));

    let removed = registry.delete_font(&arial_id).expect("Arial registered");
    assert_eq!(removed.name, "Arial");

    let body = registry.group("Body").expect("group kept");
    assert_eq!(body.fonts(), ["Georgia".to_owned()]);
    assert_eq!(body.count(), 1);
    assert!(!body.is_complete(registry.min_group_fonts()));
    assert_eq!(registry.fonts().len(), 1);
    assert_eq!(registry.blobs().len(), 1);
}

#[test]
fn colliding_name_is_handed_back() {
    let registry = FontRegistry::default();
    registry.try_add_font(font(&registry, "Arial")).unwrap();

    let duplicate = font(&registry, "ARIAL");
    let rejected = registry.try_add_font(duplicate).unwrap_err();
    assert_eq!(rejected.name, "ARIAL");
    assert_eq!(registry.font_count(), 1);
    assert!(registry.has_font_named("arial"));
    assert_eq!(registry.font_by_name("aRiAl").map(|f| f.name), Some("Arial".to_owned()));
}

#[test]
fn deleting_unknown_keys_is_a_no_op() {
    let registry = FontRegistry::default();
    registry.add_font(font(&registry, "Arial"));
    registry.add_font_group(group("Body", &["Arial", "Arial"]));

    assert!(registry.delete_font(&FontId::new("font-missing")).is_none());
    assert!(!registry.delete_font_group("Headings"));
    assert!(!registry.update_font_group("Headings", group("X", &["Arial", "Arial"])));
    assert_eq!(registry.font_count(), 1);
    assert_eq!(registry.groups().len(), 1);
}

#[test]
fn update_renames_in_place() {
    let registry = FontRegistry::default();
    registry.add_font_group(group("A", &["Arial", "Georgia"]));
    registry.add_font_group(group("Z", &["Arial", "Georgia"]));

    assert!(registry.update_font_group("A", group("B", &["Georgia", "Arial"])));

    assert!(registry.group("A").is_none());
    assert!(!registry.has_group_named("A"));
    let names: Vec<_> = registry.groups().iter().map(|g| g.name().to_owned()).collect();
    assert_eq!(names, ["B", "Z"]);
    assert_eq!(registry.group("B").unwrap().fonts(), ["Georgia".to_owned(), "Arial".to_owned()]);
}

#[test]
fn deleting_a_font_releases_its_blob_once() {
    let registry = FontRegistry::default();
    let arial = font(&registry, "Arial");
    let (id, url) = (arial.id.clone(), arial.url.clone());
    registry.add_font(arial);

    registry.delete_font(&id).unwrap();
    assert!(!registry.blobs().contains(&url));
    assert!(registry.delete_font(&id).is_none());
    assert!(registry.blobs().is_empty());
}

#[test]
fn snapshot_serializes_for_presentation() {
    let registry = FontRegistry::default();
    registry.add_font(font(&registry, "Arial"));
    registry.add_font(font(&registry, "Georgia"));
    registry.add_font_group(group("Body", &["Arial", "Georgia"]));

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.font_names().collect::<Vec<_>>(), ["Arial", "Georgia"]);
    assert_eq!(snapshot.incomplete_groups().count(), 0);

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["fonts"][0]["name"], "Arial");
    assert_eq!(value["fonts"][0]["file"]["name"], "Arial.ttf");
    assert_eq!(value["fontGroups"][0]["count"], 2);
}

#[test]
fn clones_share_state() {
    let registry = FontRegistry::default();
    let other = registry.clone();
    other.add_font(font(&other, "Arial"));
    assert!(registry.same_slice(&other));
    assert_eq!(registry.font_count(), 1);
}

#[tokio::test]
async fn events_follow_commit_order() {
    let registry = FontRegistry::default();
    let mut events = registry.subscribe();

    let arial = font(&registry, "Arial");
    let id = arial.id.clone();
    registry.try_add_font(arial).unwrap();
    registry.add_font(font(&registry, "Georgia"));
    registry.add_font_group(group("Body", &["Arial", "Georgia"]));
    registry.delete_font(&id);

    assert!(matches!(events.recv().await, Some(RegistryEvent::FontAdded { name, .. }) if name == "Arial"));
    assert!(matches!(events.recv().await, Some(RegistryEvent::FontAdded { name, .. }) if name == "Georgia"));
    assert_eq!(events.recv().await, Some(RegistryEvent::GroupAdded { name: "Body".to_owned() }));
    assert!(matches!(events.recv().await, Some(RegistryEvent::FontDeleted { .. })));
    assert_eq!(
        events.recv().await,
        Some(RegistryEvent::GroupsPruned {
            font_name: "Arial".to_owned(),
            groups: vec!["Body".to_owned()],
            incomplete: vec!["Body".to_owned()],
        })
    );
    assert!(events.try_recv().is_none());
}

#[test]
fn configured_minimum_decides_which_groups_are_incomplete() {
    let registry = FontRegistry::with_blob_store(Arc::new(BlobStore::new()), 3);
    let arial = font(&registry, "Arial");
    let id = arial.id.clone();
    for f in [arial, font(&registry, "Georgia"), font(&registry, "Inter")] {
        registry.add_font(f);
    }
    registry.add_font_group(group("Body", &["Arial", "Georgia", "Inter"]));
    let mut events = registry.subscribe();

    registry.delete_font(&id);

    let body = registry.group("Body").unwrap();
    assert_eq!(body.count(), 2);
    assert!(!body.is_complete(registry.min_group_fonts()));
    assert_eq!(registry.snapshot().incomplete_groups().count(), 1);
    assert!(matches!(events.try_recv(), Some(RegistryEvent::FontDeleted { .. })));
    assert!(matches!(
        events.try_recv(),
        Some(RegistryEvent::GroupsPruned { incomplete, .. }) if incomplete == ["Body".to_owned()]
    ));
}

#[test]
fn minimum_group_size_never_drops_below_one() {
    let registry = FontRegistry::with_blob_store(Arc::new(BlobStore::new()), 0);
    assert_eq!(registry.min_group_fonts(), 1);
    assert_eq!(FontRegistry::default().min_group_fonts(), 2);
}

#[test]
fn concurrent_writers_publish_in_commit_order() {
    let registry = FontRegistry::default();
    let mut events = registry.subscribe();

    std::thread::scope(|scope| {
        for writer in 0..4 {
            let registry = registry.clone();
            scope.spawn(move || {
                for n in 0..16 {
                    registry.add_font(font(&registry, &format!("W{writer}-{n}")));
                }
            });
        }
    });

    let mut published = Vec::new();
    while let Some(event) = events.try_recv() {
        if let RegistryEvent::FontAdded { id, .. } = event {
            published.push(id);
        }
    }
    let committed: Vec<_> = registry.fonts().into_iter().map(|f| f.id).collect();
    assert_eq!(published.len(), 64);
    assert_eq!(published, committed);
}
