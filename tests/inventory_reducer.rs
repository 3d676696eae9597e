mod common;

use common::{pet, sample_pets};
use petstore::inventory::{InventoryIntent, InventoryReducer, InventoryState, LOAD_ERROR_MESSAGE};
use petstore::pet::PetField;
use petstore::ui::mvi::Reducer;

fn loaded() -> InventoryState {
    InventoryReducer::reduce(
        InventoryState::default(),
        InventoryIntent::Loaded {
            pets: sample_pets(),
        },
    )
}

fn ids(state: &InventoryState) -> Vec<i64> {
    state.pets.as_slice().iter().map(|p| p.id).collect()
}

#[test]
fn loaded_replaces_store_and_clears_loading() {
    let state = loaded();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(ids(&state), vec![3, 1, 2]);
}

#[test]
fn loaded_drops_duplicate_ids() {
    let state = InventoryReducer::reduce(
        InventoryState::default(),
        InventoryIntent::Loaded {
            pets: vec![
                pet(1, "Tom", "Cat", "Siamese"),
                pet(1, "Other", "Cat", "Persian"),
            ],
        },
    );
    assert_eq!(state.pets.len(), 1);
    assert_eq!(state.pets.as_slice()[0].name, "Tom");
}

#[test]
fn load_failed_empties_store() {
    let state = InventoryReducer::reduce(loaded(), InventoryIntent::LoadFailed);
    assert!(state.pets.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
}

#[test]
fn draft_changed_keeps_raw_price_text() {
    let state = InventoryReducer::reduce(
        InventoryState::default(),
        InventoryIntent::DraftChanged {
            field: PetField::Price,
            value: "12.".to_string(),
        },
    );
    assert_eq!(state.form.price_input, "12.");
    assert_eq!(state.form.draft.price, 12.0);

    let state = InventoryReducer::reduce(
        state,
        InventoryIntent::DraftChanged {
            field: PetField::Price,
            value: "12.x".to_string(),
        },
    );
    assert_eq!(state.form.price_input, "12.x");
    assert!(state.form.draft.price.is_nan());
}

#[test]
fn begin_edit_unknown_id_changes_nothing() {
    let before = loaded();
    let after = InventoryReducer::reduce(before.clone(), InventoryIntent::BeginEdit { id: 99 });
    assert_eq!(after, before);
}

#[test]
fn created_appends_and_resets_form() {
    let state = InventoryReducer::reduce(
        loaded(),
        InventoryIntent::DraftChanged {
            field: PetField::Name,
            value: "Rex".to_string(),
        },
    );
    let state = InventoryReducer::reduce(
        state,
        InventoryIntent::Created {
            pet: pet(4, "Rex", "Dog", "Lab"),
        },
    );
    assert_eq!(ids(&state), vec![3, 1, 2, 4]);
    assert_eq!(state.form.draft.name, "");
    assert_eq!(state.editing(), None);
}

#[test]
fn updated_keeps_position() {
    let state = InventoryReducer::reduce(loaded(), InventoryIntent::BeginEdit { id: 1 });
    let state = InventoryReducer::reduce(
        state,
        InventoryIntent::Updated {
            id: 1,
            pet: pet(1, "Thomas", "Cat", "Siamese"),
        },
    );
    assert_eq!(ids(&state), vec![3, 1, 2]);
    assert_eq!(state.pets.as_slice()[1].name, "Thomas");
    assert_eq!(state.editing(), None);
}

#[test]
fn deleted_unknown_id_is_noop_on_store() {
    let state = InventoryReducer::reduce(loaded(), InventoryIntent::Deleted { id: 42 });
    assert_eq!(ids(&state), vec![3, 1, 2]);
}

#[test]
fn rejected_names_missing_fields() {
    let state = InventoryReducer::reduce(
        loaded(),
        InventoryIntent::Rejected {
            missing: vec![PetField::Name, PetField::Image],
        },
    );
    assert_eq!(
        state.notice.as_deref(),
        Some("Missing required fields: Name, Image URL")
    );
    assert_eq!(ids(&state), vec![3, 1, 2]);
}

#[test]
fn mutation_failed_only_sets_notice() {
    let before = loaded();
    let after = InventoryReducer::reduce(
        before.clone(),
        InventoryIntent::MutationFailed {
            message: "Could not delete pet: boom".to_string(),
        },
    );
    assert_eq!(after.pets, before.pets);
    assert_eq!(after.form, before.form);
    assert_eq!(after.notice.as_deref(), Some("Could not delete pet: boom"));

    let cleared = InventoryReducer::reduce(after, InventoryIntent::DismissNotice);
    assert_eq!(cleared, before);
}

#[test]
fn set_query_does_not_touch_store() {
    let state = InventoryReducer::reduce(
        loaded(),
        InventoryIntent::SetQuery {
            text: "fish".to_string(),
        },
    );
    assert_eq!(state.pets.len(), 3);
    let visible: Vec<i64> = state.visible().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![3]);
}
