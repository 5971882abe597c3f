//! Backend access and view synchronization for the library UI.
//!
//! The web app owns rendering; this crate owns everything that talks to the
//! backend or decides what the views hold. Nothing here depends on Dioxus, so
//! the fetch/resync contract is tested natively.

pub mod backend;
pub mod client;
pub mod config;
pub mod creation;
pub mod error;
pub mod grid;
pub mod sync;

// Re-exports for convenience
pub use backend::{GameQuery, LibraryBackend};
pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use creation::{CreateOutcome, create_collection};
pub use error::Error;
pub use grid::{GridSlot, collection_grid};
pub use sync::{EntityKind, resync};

pub use salsi_types::*;
