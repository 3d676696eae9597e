use std::fmt;
use thiserror::Error;

use crate::client::ClientError;
use crate::pet::PetField;

/// The draft would fail the form's required-field check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<PetField>),
}

fn join_fields(fields: &[PetField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Remote operation kinds, named for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::FetchAll => "load pets",
            Operation::Create => "add pet",
            Operation::Update => "update pet",
            Operation::Delete => "delete pet",
        })
    }
}

/// A remote operation failed; state was left as it was.
#[derive(Debug, Error)]
#[error("Could not {operation}: {source}")]
pub struct RequestError {
    pub operation: Operation,
    #[source]
    pub source: ClientError,
}

/// Anything `Inventory::submit` can refuse with.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Request(#[from] RequestError),
}
