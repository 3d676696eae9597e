use crate::client::PetApi;
use crate::inventory::error::{Operation, RequestError};
use crate::inventory::intent::InventoryIntent;
use crate::pet::{PetDraft, PetId};

/// One remote call. Executing it yields the single intent that applies the
/// server-confirmed result; nothing is applied before the server answers.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteRequest {
    FetchAll,
    Create { draft: PetDraft },
    Update { id: PetId, draft: PetDraft },
    Delete { id: PetId },
}

impl RemoteRequest {
    pub fn operation(&self) -> Operation {
        match self {
            RemoteRequest::FetchAll => Operation::FetchAll,
            RemoteRequest::Create { .. } => Operation::Create,
            RemoteRequest::Update { .. } => Operation::Update,
            RemoteRequest::Delete { .. } => Operation::Delete,
        }
    }

    /// Run against `client`, returning the confirming intent or the error.
    pub async fn execute<C: PetApi>(self, client: &C) -> Result<InventoryIntent, RequestError> {
        let operation = self.operation();
        let result = match self {
            RemoteRequest::FetchAll => client
                .list()
                .await
                .map(|pets| InventoryIntent::Loaded { pets }),
            RemoteRequest::Create { draft } => client
                .create(&draft)
                .await
                .map(|pet| InventoryIntent::Created { pet }),
            RemoteRequest::Update { id, draft } => client
                .update(id, &draft)
                .await
                .map(|pet| InventoryIntent::Updated { id, pet }),
            RemoteRequest::Delete { id } => client
                .delete(id)
                .await
                .map(|()| InventoryIntent::Deleted { id }),
        };

        result.map_err(|source| {
            tracing::error!(
                operation = %operation,
                kind = source.kind(),
                error = %source,
                "Inventory request failed"
            );
            RequestError { operation, source }
        })
    }

    /// Like [`RemoteRequest::execute`], folding failure into its intent.
    pub async fn run<C: PetApi>(self, client: &C) -> InventoryIntent {
        match self.execute(client).await {
            Ok(intent) => intent,
            Err(err) => err.to_intent(),
        }
    }
}

impl Operation {
    /// Intent recording that this operation failed with `message`.
    pub fn failed(self, message: String) -> InventoryIntent {
        match self {
            Operation::FetchAll => InventoryIntent::LoadFailed,
            _ => InventoryIntent::MutationFailed {
                message: format!("Could not {}: {}", self, message),
            },
        }
    }
}

impl RequestError {
    pub fn to_intent(&self) -> InventoryIntent {
        self.operation.failed(self.source.to_string())
    }
}
