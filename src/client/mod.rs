//! Remote client for the pet inventory REST API.
//!
//! [`PetApi`] is the seam the view-model talks through; [`HttpPetClient`]
//! is the reqwest implementation used at runtime.

mod error;
mod http;

pub use error::ClientError;
pub use http::{parse_base_url, HttpPetClient};

use std::future::Future;

use crate::pet::{Pet, PetDraft, PetId};

/// The four operations the inventory depends on.
///
/// | Operation | Verb   | Path          |
/// |-----------|--------|---------------|
/// | list      | GET    | `{base}`      |
/// | create    | POST   | `{base}`      |
/// | update    | PUT    | `{base}/{id}` |
/// | delete    | DELETE | `{base}/{id}` |
pub trait PetApi: Send + Sync {
    /// Fetch every record, in server order.
    fn list(&self) -> impl Future<Output = Result<Vec<Pet>, ClientError>> + Send;

    /// Create a record. The server assigns the id.
    fn create(&self, draft: &PetDraft) -> impl Future<Output = Result<Pet, ClientError>> + Send;

    /// Replace a record wholesale. The body carries the id as well.
    fn update(
        &self,
        id: PetId,
        draft: &PetDraft,
    ) -> impl Future<Output = Result<Pet, ClientError>> + Send;

    /// Remove a record. Any response body is ignored.
    fn delete(&self, id: PetId) -> impl Future<Output = Result<(), ClientError>> + Send;
}
