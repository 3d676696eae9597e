use crate::inventory::error::DraftError;
use crate::inventory::intent::InventoryIntent;
use crate::inventory::state::{DraftForm, InventoryState, LOAD_ERROR_MESSAGE};
use crate::inventory::store::ListStore;
use crate::ui::mvi::Reducer;

pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryState;
    type Intent = InventoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::FetchStarted => InventoryState::default(),
            InventoryIntent::Loaded { pets } => InventoryState {
                pets: ListStore::from_server(pets),
                loading: false,
                error: None,
                ..state
            },
            InventoryIntent::LoadFailed => InventoryState {
                pets: ListStore::default(),
                loading: false,
                error: Some(LOAD_ERROR_MESSAGE.to_string()),
                ..state
            },
            InventoryIntent::DraftChanged { field, value } => {
                state.form.set(field, &value);
                state
            }
            InventoryIntent::BeginEdit { id } => {
                if let Some(pet) = state.pets.get(id) {
                    state.form = DraftForm::for_pet(pet);
                }
                state
            }
            InventoryIntent::CancelEdit => InventoryState {
                form: DraftForm::default(),
                ..state
            },
            InventoryIntent::Rejected { missing } => InventoryState {
                notice: Some(DraftError::MissingFields(missing).to_string()),
                ..state
            },
            InventoryIntent::Created { pet } => {
                state.pets.append(pet);
                InventoryState {
                    form: DraftForm::default(),
                    notice: None,
                    ..state
                }
            }
            InventoryIntent::Updated { id, pet } => {
                state.pets.replace(id, pet);
                InventoryState {
                    form: DraftForm::default(),
                    notice: None,
                    ..state
                }
            }
            InventoryIntent::Deleted { id } => {
                state.pets.remove(id);
                if state.form.editing == Some(id) {
                    state.form = DraftForm::default();
                }
                InventoryState {
                    notice: None,
                    ..state
                }
            }
            InventoryIntent::MutationFailed { message } => InventoryState {
                notice: Some(message),
                ..state
            },
            InventoryIntent::Refused { operation } => InventoryState {
                notice: Some(format!(
                    "Could not {}: another request is in progress",
                    operation
                )),
                ..state
            },
            InventoryIntent::SetQuery { text } => InventoryState {
                query: text,
                ..state
            },
            InventoryIntent::DismissNotice => InventoryState {
                notice: None,
                ..state
            },
        }
    }
}
