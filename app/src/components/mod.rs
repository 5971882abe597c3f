//! UI Components
//!
//! Views own their list state and talk to the backend; cards only render
//! what they are given.

pub mod collection_card;
pub mod collections_view;
pub mod create_collection_modal;
pub mod game_card;
pub mod library_view;
pub mod toast;

pub use collection_card::{CollectionCard, CreateCollectionCard};
pub use collections_view::CollectionsView;
pub use create_collection_modal::CreateCollectionModal;
pub use game_card::GameCard;
pub use library_view::LibraryView;
pub use toast::{ToastFrame, ToastManager, ToastSeverity, use_toast, use_toast_provider};
