use fhub_groups::{Selection, validate_group};
use proptest::prelude::*;

fn selection() -> impl Strategy<Value = Selection> {
    (prop::sample::select(vec!["", "Arial", "Georgia", "Inter", "Roboto"]), "[a-z ]{0,6}")
        .prop_map(|(font, label)| Selection::new(font, label))
}

proptest! {
    #[test]
    fn validated_groups_meet_the_minimum(
        name in "[A-Za-z ]{0,8}",
        rows in prop::collection::vec(selection(), 0..8),
        min in 1usize..4,
    ) {
        if let Ok(group) = validate_group(&name, &rows, min) {
            prop_assert!(!group.name().is_empty());
            prop_assert!(group.count() >= min);
            prop_assert_eq!(group.count(), group.fonts().len());

            let mut unique = group.fonts().to_vec();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), group.count());

            for font in group.fonts() {
                prop_assert!(!group.label_for(font).trim().is_empty());
            }
        }
    }
}
