use fhub_domain::font::{Font, FontId, SourceFile};
use fhub_groups::{GroupError, GroupFlow, GroupForm, Selection};
use fhub_registry::FontRegistry;
use std::sync::Arc;

fn registry_with(names: &[&str]) -> FontRegistry {
    let registry = FontRegistry::default();
    for name in names {
        let bytes: Arc<[u8]> = Arc::from(name.as_bytes());
        registry.add_font(Font {
            id: FontId::new(format!("font-0-{name}")),
            name: (*name).to_owned(),
            url: registry.blobs().create(Arc::clone(&bytes)),
            file: SourceFile::new(format!("{name}.ttf"), bytes),
        });
    }
    registry
}

#[test]
fn form_submit_adds_group_and_resets() {
    let registry = registry_with(&["Arial", "Georgia"]);
    let flow = GroupFlow::new(registry.clone());

    let mut form = GroupForm::new();
    form.set_name("Body");
    form.select_font(0, "Arial");
    form.set_label(0, "Heading");
    form.add_row();
    form.select_font(1, "Georgia");

    let group = form.submit(&flow).unwrap();

    assert_eq!(group.fonts(), ["Arial".to_owned(), "Georgia".to_owned()]);
    assert_eq!(registry.group("Body"), Some(group));
    assert_eq!(form, GroupForm::new());
}

#[test]
fn form_keeps_input_and_message_on_failure() {
    let flow = GroupFlow::new(registry_with(&["Arial"]));

    let mut form = GroupForm::new();
    form.set_name("Body");
    form.select_font(0, "Arial");

    assert!(form.submit(&flow).is_err());
    assert_eq!(form.error(), Some("You have to select at least two fonts"));
    assert_eq!(form.name(), "Body");

    form.set_name("");
    assert!(matches!(form.submit(&flow), Err(GroupError::NameRequired { .. })));
    assert_eq!(form.error(), Some("Group name is required"));
}

#[test]
fn unknown_fonts_are_rejected() {
    let registry = registry_with(&["Arial"]);
    let flow = GroupFlow::new(registry.clone());

    let err = flow
        .create("Body", &[Selection::new("Arial", ""), Selection::new("Comic Sans", "")])
        .unwrap_err();

    assert_eq!(err.to_string(), "Font \"Comic Sans\" is not registered");
    assert!(registry.groups().is_empty());
}

#[test]
fn group_names_stay_unique() {
    let registry = registry_with(&["Arial", "Georgia"]);
    let flow = GroupFlow::new(registry.clone());
    let members = [Selection::new("Arial", ""), Selection::new("Georgia", "")];

    flow.create("Body", &members).unwrap();
    let err = flow.create("Body", &members).unwrap_err();

    assert_eq!(err.to_string(), "A font group named \"Body\" already exists");
    assert_eq!(registry.groups().len(), 1);
}

#[test]
fn editor_renames_and_toggles_members() {
    let registry = registry_with(&["Arial", "Georgia", "Inter"]);
    let flow = GroupFlow::new(registry.clone());
    flow.create("A", &[Selection::new("Arial", ""), Selection::new("Georgia", "")]).unwrap();
    flow.create("Z", &[Selection::new("Arial", ""), Selection::new("Inter", "")]).unwrap();

    let mut editor = flow.edit("A").expect("group exists");
    editor.set_name("B");
    assert!(!editor.toggle_font("Arial"));
    assert!(!editor.can_save());
    assert!(editor.toggle_font("Inter"));
    editor.set_label("Inter", "UI");
    assert!(editor.can_save());

    let saved = editor.save(&flow).unwrap();

    assert_eq!(saved.fonts(), ["Georgia".to_owned(), "Inter".to_owned()]);
    assert_eq!(saved.label_for("Inter"), "UI");
    assert!(registry.group("A").is_none());
    let names: Vec<_> = registry.groups().iter().map(|g| g.name().to_owned()).collect();
    assert_eq!(names, ["B", "Z"]);
}

#[test]
fn editor_may_keep_its_own_name_but_not_take_another() {
    let registry = registry_with(&["Arial", "Georgia"]);
    let flow = GroupFlow::new(registry);
    let members = [Selection::new("Arial", ""), Selection::new("Georgia", "")];
    flow.create("A", &members).unwrap();
    flow.create("Z", &members).unwrap();

    let mut editor = flow.edit("A").unwrap();
    editor.set_label("Arial", "Display");
    assert!(editor.save(&flow).is_ok());

    editor.set_name("Z");
    assert!(matches!(editor.save(&flow), Err(GroupError::DuplicateName { .. })));
}

#[test]
fn editing_a_deleted_group_reports_it() {
    let registry = registry_with(&["Arial", "Georgia"]);
    let flow = GroupFlow::new(registry);
    flow.create("A", &[Selection::new("Arial", ""), Selection::new("Georgia", "")]).unwrap();

    let editor = flow.edit("A").unwrap();
    assert!(flow.delete("A"));
    assert!(!flow.delete("A"));

    assert!(matches!(editor.save(&flow), Err(GroupError::GroupNotFound { .. })));
}

#[test]
fn deleting_a_member_font_leaves_group_for_editing() {
    let registry = registry_with(&["Arial", "Georgia"]);
    let flow = GroupFlow::new(registry.clone());
    flow.create("Body", &[Selection::new("Arial", ""), Selection::new("Georgia", "")]).unwrap();

    registry.delete_font(&FontId::new("font-0-Arial"));

    let editor = flow.edit("Body").unwrap();
    assert_eq!(editor.fonts(), ["Georgia".to_owned()]);
    assert!(!editor.can_save());
    assert!(editor.save(&flow).is_err());
    assert_eq!(flow.selectable_fonts(), ["Georgia".to_owned()]);
}
