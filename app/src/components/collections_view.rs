//! Collections view: the creation card followed by every collection.

use dioxus::prelude::*;
use salsi_core::{
    ApiClient, Collection, CreateOutcome, EntityKind, GridSlot, collection_grid,
    create_collection, resync,
};

use super::{
    CollectionCard, CreateCollectionCard, CreateCollectionModal, ToastManager, ToastSeverity,
    use_toast,
};
use crate::api::use_api;

/// Read the collection list and replace view state with it.
async fn load_collections(
    api: ApiClient,
    mut collections: Signal<Vec<Collection>>,
    mut toast: ToastManager,
) {
    let result = api.list_collections().await;
    let failure = result
        .as_ref()
        .err()
        .map(|e| format!("Could not load collections: {e}"));

    resync(&mut collections.write(), result, EntityKind::Collections);

    if let Some(message) = failure {
        toast.show(message, ToastSeverity::Critical);
    }
}

/// Run the creation flow for a dialog result and apply what came back.
async fn submit_collection(
    api: ApiClient,
    name: Option<String>,
    mut collections: Signal<Vec<Collection>>,
    mut creating: Signal<bool>,
    mut toast: ToastManager,
) {
    creating.set(true);
    let outcome = create_collection(&api, name.as_deref()).await;
    creating.set(false);

    match outcome {
        CreateOutcome::Aborted => {}
        CreateOutcome::Created { id, collections: fresh } => {
            resync(&mut collections.write(), Ok(fresh), EntityKind::Collections);
            toast.show(format!("Created collection \"{id}\""), ToastSeverity::Success);
        }
        CreateOutcome::CreateFailed(e) => {
            toast.show(format!("Could not create collection: {e}"), ToastSeverity::Critical);
        }
        CreateOutcome::RefreshFailed { id, error } => {
            toast.show(
                format!("Created \"{id}\" but could not refresh collections: {error}"),
                ToastSeverity::Normal,
            );
        }
    }
}

#[component]
pub fn CollectionsView() -> Element {
    let api = use_api();
    let toast = use_toast();

    let collections = use_signal(Vec::<Collection>::new);
    let mut show_dialog = use_signal(|| false);
    let creating = use_signal(|| false);

    // Fetch once on mount
    let mount_api = api.clone();
    use_future(move || load_collections(mount_api.clone(), collections, toast));

    let on_dialog_close = move |name: Option<String>| {
        show_dialog.set(false);
        spawn(submit_collection(api.clone(), name, collections, creating, toast));
    };

    let list = collections.read();

    rsx! {
        div { class: "collections-view",
            h1 { "Collections" }
            div { class: "card-grid",
                for slot in collection_grid(&list) {
                    div { key: "{slot.key()}", class: "grid-cell",
                        if let GridSlot::Entity(collection) = slot {
                            CollectionCard { collection: collection.clone() }
                        } else {
                            CreateCollectionCard {
                                busy: creating(),
                                on_create: move |_| show_dialog.set(true),
                            }
                        }
                    }
                }
            }

            if show_dialog() {
                CreateCollectionModal { on_close: on_dialog_close }
            }
        }
    }
}
