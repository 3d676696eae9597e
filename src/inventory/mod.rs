//! The inventory view-model.
//!
//! [`InventoryState`] holds the list store, the draft form, the query text
//! and the `loading`/`error`/`notice` flags. It only changes through
//! [`InventoryReducer`]. Remote calls are [`RemoteRequest`] values; each
//! one resolves to exactly one intent once the server has answered, so the
//! list store is never touched speculatively.
//!
//! [`Inventory`] bundles a state with a [`PetApi`] and exposes the
//! operations as async methods. The terminal UI drives the same reducer and
//! requests from its own event loop instead.

mod error;
pub mod filter;
mod intent;
mod reducer;
mod request;
mod state;
mod store;

pub use error::{DraftError, InventoryError, Operation, RequestError};
pub use intent::InventoryIntent;
pub use reducer::InventoryReducer;
pub use request::RemoteRequest;
pub use state::{DraftForm, InventoryState, LOAD_ERROR_MESSAGE};
pub use store::ListStore;

use crate::client::PetApi;
use crate::pet::{Pet, PetField, PetId};
use crate::ui::mvi::Reducer;

/// Inventory state bound to a remote client.
pub struct Inventory<C> {
    client: C,
    state: InventoryState,
}

impl<C: PetApi> Inventory<C> {
    /// A fresh inventory in the loading state. Call [`Inventory::fetch_all`]
    /// to populate it.
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: InventoryState::default(),
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: InventoryIntent) {
        self.state = InventoryReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Replace the list store with the server's list. On failure the store
    /// is emptied and the error message set.
    pub async fn fetch_all(&mut self) -> Result<(), RequestError> {
        self.perform(RemoteRequest::FetchAll).await
    }

    /// Discard all local state and fetch again.
    pub async fn reload(&mut self) -> Result<(), RequestError> {
        self.dispatch(InventoryIntent::FetchStarted);
        self.fetch_all().await
    }

    pub fn update_draft(&mut self, field: PetField, value: &str) {
        self.dispatch(InventoryIntent::DraftChanged {
            field,
            value: value.to_string(),
        });
    }

    /// Create or update from the draft, depending on whether an edit is in
    /// progress. An invalid draft sends nothing.
    pub async fn submit(&mut self) -> Result<(), InventoryError> {
        let request = match self.state.submit_request() {
            Ok(request) => request,
            Err(DraftError::MissingFields(missing)) => {
                self.dispatch(InventoryIntent::Rejected {
                    missing: missing.clone(),
                });
                return Err(DraftError::MissingFields(missing).into());
            }
        };
        self.perform(request).await?;
        Ok(())
    }

    pub async fn delete(&mut self, id: PetId) -> Result<(), RequestError> {
        self.perform(RemoteRequest::Delete { id }).await
    }

    /// Load the pet with `id` into the form. No-op for an unknown id.
    pub fn begin_edit(&mut self, id: PetId) {
        self.dispatch(InventoryIntent::BeginEdit { id });
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(InventoryIntent::CancelEdit);
    }

    pub fn set_filter_text(&mut self, text: &str) {
        self.dispatch(InventoryIntent::SetQuery {
            text: text.to_string(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(InventoryIntent::DismissNotice);
    }

    pub fn visible(&self) -> Vec<&Pet> {
        self.state.visible()
    }

    async fn perform(&mut self, request: RemoteRequest) -> Result<(), RequestError> {
        match request.execute(&self.client).await {
            Ok(intent) => {
                self.dispatch(intent);
                Ok(())
            }
            Err(err) => {
                self.dispatch(err.to_intent());
                Err(err)
            }
        }
    }
}
