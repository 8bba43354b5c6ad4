use proptest::prelude::*;
use triangle_core::{Attribute, SelectionController, SelectionSet, ViewState, MAX_SELECTIONS};

fn attribute() -> impl Strategy<Value = Attribute> {
    prop_oneof![
        Just(Attribute::Good),
        Just(Attribute::Fast),
        Just(Attribute::Cheap),
    ]
}

proptest! {
    #[test]
    fn prop_toggle_never_exceeds_cap(toggles in proptest::collection::vec(attribute(), 0..64)) {
        let mut controller = SelectionController::new();
        for attribute in toggles {
            let before = controller.current_selection();
            match controller.toggle(attribute) {
                Ok(_) => {}
                Err(err) => {
                    prop_assert!(err.is_recoverable());
                    prop_assert_eq!(controller.current_selection(), before);
                }
            }
            prop_assert!(controller.current_selection().len() <= MAX_SELECTIONS);
        }
    }

    #[test]
    fn prop_successful_toggle_is_self_inverse(
        prefix in proptest::collection::vec(attribute(), 0..16),
        target in attribute(),
    ) {
        let mut controller = SelectionController::new();
        for attribute in prefix {
            let _ = controller.toggle(attribute);
        }
        let before = controller.current_selection();
        if controller.toggle(target).is_ok() {
            prop_assert!(controller.toggle(target).is_ok());
            prop_assert_eq!(controller.current_selection(), before);
        }
    }

    #[test]
    fn prop_view_state_is_pure(members in proptest::collection::vec(attribute(), 0..4)) {
        let selection: SelectionSet = members.into_iter().collect();
        prop_assert_eq!(ViewState::derive(&selection), ViewState::derive(&selection));
    }

    #[test]
    fn prop_view_state_ignores_selection_order(a in attribute(), b in attribute()) {
        let forward: SelectionSet = [a, b].into_iter().collect();
        let backward: SelectionSet = [b, a].into_iter().collect();
        prop_assert_eq!(ViewState::derive(&forward), ViewState::derive(&backward));
    }
}
