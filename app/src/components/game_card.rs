//! Library card for a single game.

use dioxus::prelude::*;
use salsi_core::{Game, initials};

use crate::api::use_api;

/// Cover, title and a few display fields. No state of its own.
#[component]
pub fn GameCard(game: Game) -> Element {
    let api = use_api();
    let name = game.display_name();
    let cover = game.imagem_capa.as_deref().and_then(|p| api.media_url(p));

    rsx! {
        article { class: "card game-card", title: "{name}",
            if let Some(url) = cover {
                img { class: "card-cover", src: "{url}", alt: "{name}" }
            } else {
                div { class: "card-cover cover-fallback", "{initials(&name)}" }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{name}" }
                if let Some(dev) = game.desenvolvedor.as_ref().or(game.studio.as_ref()) {
                    span { class: "card-subtitle", "{dev}" }
                }
                if !game.tags.is_empty() {
                    div { class: "tag-list",
                        for tag in game.tags.iter() {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
