//! Library view: every game in the backend, one card each.

use dioxus::prelude::*;
use salsi_core::{ApiClient, EntityKind, Game, GameQuery, resync};

use super::{GameCard, ToastManager, ToastSeverity, use_toast};
use crate::api::use_api;

/// Read the game list and replace view state with it.
///
/// Failures leave `games` untouched and are reported through a toast.
async fn load_games(
    api: ApiClient,
    query: GameQuery,
    mut games: Signal<Vec<Game>>,
    mut toast: ToastManager,
) {
    let result = api.list_games(&query).await;
    let failure = result
        .as_ref()
        .err()
        .map(|e| format!("Could not load games: {e}"));

    resync(&mut games.write(), result, EntityKind::Games);

    if let Some(message) = failure {
        toast.show(message, ToastSeverity::Critical);
    }
}

#[component]
pub fn LibraryView() -> Element {
    let api = use_api();
    let toast = use_toast();

    let games = use_signal(Vec::<Game>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);

    // Fetch once on mount
    let mount_api = api.clone();
    use_future(move || {
        let api = mount_api.clone();
        async move {
            load_games(api, GameQuery::default(), games, toast).await;
            loading.set(false);
        }
    });

    let list = games.read();

    rsx! {
        main { class: "library-view",
            form {
                class: "search-bar",
                onsubmit: move |e| {
                    e.prevent_default();
                    let query = GameQuery::parse(&search());
                    spawn(load_games(api.clone(), query, games, toast));
                },
                input {
                    r#type: "search",
                    class: "input",
                    placeholder: "Search games, #tag to filter by tag",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                button { r#type: "submit", class: "btn btn-primary", "Search" }
            }

            if list.is_empty() {
                div { class: "empty-state",
                    if loading() { "Loading library..." } else { "No games found" }
                }
            }

            div { class: "card-grid",
                for game in list.iter() {
                    GameCard { key: "{game.id}", game: game.clone() }
                }
            }
        }
    }
}
