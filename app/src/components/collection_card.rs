//! Collection grid cards: one per collection, plus the "add new" affordance.

use dioxus::prelude::*;
use salsi_core::{Collection, initials};

use crate::api::use_api;

/// Card for an existing collection.
#[component]
pub fn CollectionCard(collection: Collection) -> Element {
    let api = use_api();
    let cover = collection.capa.as_deref().and_then(|p| api.media_url(p));

    rsx! {
        article { class: "card collection-card", title: "{collection.nome}",
            if let Some(url) = cover {
                img { class: "card-cover", src: "{url}", alt: "{collection.nome}" }
            } else {
                div { class: "card-cover cover-fallback", "{initials(&collection.nome)}" }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{collection.nome}" }
                if let Some(desc) = &collection.descricao {
                    p { class: "card-description", "{desc}" }
                }
            }
        }
    }
}

/// The "add new" card. Carries no entity data; clicking hands off to `on_create`.
#[component]
pub fn CreateCollectionCard(
    on_create: EventHandler<()>,
    /// A creation request is in flight.
    #[props(default = false)]
    busy: bool,
) -> Element {
    rsx! {
        button {
            class: "card collection-card create-card",
            disabled: busy,
            onclick: move |_| on_create.call(()),
            span { class: "create-icon", if busy { "…" } else { "+" } }
            span { class: "card-title", "New collection" }
        }
    }
}
