use crate::inventory::error::Operation;
use crate::pet::{Pet, PetField, PetId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryIntent {
    /// A reload began: local state is discarded and the list shows loading.
    FetchStarted,
    /// Server returned the full list.
    Loaded { pets: Vec<Pet> },
    /// The list fetch failed for any reason.
    LoadFailed,
    DraftChanged { field: PetField, value: String },
    BeginEdit { id: PetId },
    CancelEdit,
    /// Submit refused before any request was sent.
    Rejected { missing: Vec<PetField> },
    /// Server confirmed a create.
    Created { pet: Pet },
    /// Server confirmed an update of `id`.
    Updated { id: PetId, pet: Pet },
    /// Server confirmed a delete.
    Deleted { id: PetId },
    /// A create, update or delete failed. State is untouched apart from
    /// the notice.
    MutationFailed { message: String },
    /// A request was refused before sending because another is outstanding.
    Refused { operation: Operation },
    SetQuery { text: String },
    DismissNotice,
}

impl Intent for InventoryIntent {}
