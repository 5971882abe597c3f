//! Collection creation flow.
//!
//! Every successful write is followed by one full read of the collection list.
//! Nothing is inserted into view state locally.

use salsi_types::{Collection, NewCollection};

use crate::{Error, LibraryBackend};

/// Result of [`create_collection`].
#[derive(Debug)]
pub enum CreateOutcome {
    /// No name was given; no request was made.
    Aborted,
    /// Created, and the list was read back from the backend.
    Created {
        id: String,
        collections: Vec<Collection>,
    },
    /// The create request failed. View state must not change.
    CreateFailed(Error),
    /// Created, but the follow-up read failed. View state stays stale.
    RefreshFailed { id: String, error: Error },
}

/// Create a collection named by the user and re-read the list.
///
/// `name` is the dialog result: `None` when cancelled. Blank names abort
/// without touching the backend.
pub async fn create_collection<B: LibraryBackend>(backend: &B, name: Option<&str>) -> CreateOutcome {
    let Some(body) = name.and_then(NewCollection::from_name) else {
        tracing::debug!("Collection creation cancelled");
        return CreateOutcome::Aborted;
    };

    if let Err(e) = backend.create_collection(&body).await {
        tracing::error!(id = %body.id, error = %e, "Failed to create collection");
        return CreateOutcome::CreateFailed(e);
    }
    tracing::info!(id = %body.id, nome = %body.nome, "Collection created");

    match backend.list_collections().await {
        Ok(collections) => CreateOutcome::Created {
            id: body.id,
            collections,
        },
        Err(e) => {
            tracing::error!(id = %body.id, error = %e, "Failed to refresh collections after create");
            CreateOutcome::RefreshFailed { id: body.id, error: e }
        }
    }
}
