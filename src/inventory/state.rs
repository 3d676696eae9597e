use crate::inventory::error::DraftError;
use crate::inventory::filter;
use crate::inventory::request::RemoteRequest;
use crate::inventory::store::ListStore;
use crate::pet::{format_price, Pet, PetDraft, PetField, PetId};
use crate::ui::mvi::UiState;

/// Message shown in place of the list when the fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "NO PETS AVAILABLE.";

/// The form: the draft being composed, the raw price text as typed, and
/// the id being edited (none while adding).
#[derive(Debug, Clone, PartialEq)]
pub struct DraftForm {
    pub draft: PetDraft,
    pub price_input: String,
    pub editing: Option<PetId>,
}

impl Default for DraftForm {
    fn default() -> Self {
        let draft = PetDraft::default();
        let price_input = format_price(draft.price);
        Self {
            draft,
            price_input,
            editing: None,
        }
    }
}

impl DraftForm {
    /// Form pre-filled from `pet`, editing its id.
    pub fn for_pet(pet: &Pet) -> Self {
        Self {
            draft: PetDraft::from(pet),
            price_input: format_price(pet.price),
            editing: Some(pet.id),
        }
    }

    /// Text shown in the input for `field`.
    pub fn input(&self, field: PetField) -> String {
        match field {
            PetField::Price => self.price_input.clone(),
            other => self.draft.text(other),
        }
    }

    pub fn set(&mut self, field: PetField, value: &str) {
        self.draft.set(field, value);
        if field == PetField::Price {
            self.price_input = value.to_string();
        }
    }
}

/// Everything the inventory screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    pub pets: ListStore,
    pub form: DraftForm,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Last mutation or validation failure, until dismissed.
    pub notice: Option<String>,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            pets: ListStore::default(),
            form: DraftForm::default(),
            query: String::new(),
            loading: true,
            error: None,
            notice: None,
        }
    }
}

impl UiState for InventoryState {}

impl InventoryState {
    /// Pets matching the current query, in store order.
    pub fn visible(&self) -> Vec<&Pet> {
        filter::filter(self.pets.as_slice(), &self.query)
    }

    pub fn editing(&self) -> Option<PetId> {
        self.form.editing
    }

    pub fn is_editing(&self) -> bool {
        self.form.editing.is_some()
    }

    /// The request a submit would send: update while editing, otherwise
    /// create. Fails if a required field is empty.
    pub fn submit_request(&self) -> Result<RemoteRequest, DraftError> {
        let missing = self.form.draft.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }

        let draft = self.form.draft.clone();
        Ok(match self.form.editing {
            Some(id) => RemoteRequest::Update { id, draft },
            None => RemoteRequest::Create { draft },
        })
    }
}
