//! Root component: providers, navigation and the active view.

use dioxus::prelude::*;

use crate::api::use_api_provider;
use crate::components::{CollectionsView, LibraryView, ToastFrame, use_toast_provider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Top-level screens. Switching unmounts the previous view, so each visit
/// starts from a fresh fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Library,
    Collections,
}

#[component]
pub fn App() -> Element {
    use_api_provider();
    use_toast_provider();

    let mut page = use_signal(|| Page::Library);

    let tab_class = move |p: Page| {
        if page() == p { "nav-tab active" } else { "nav-tab" }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header { class: "app-header",
            span { class: "app-title", "Salsi Launcher" }
            nav { class: "app-nav",
                button {
                    class: tab_class(Page::Library),
                    onclick: move |_| page.set(Page::Library),
                    "Library"
                }
                button {
                    class: tab_class(Page::Collections),
                    onclick: move |_| page.set(Page::Collections),
                    "Collections"
                }
            }
        }

        match page() {
            Page::Library => rsx! { LibraryView {} },
            Page::Collections => rsx! { CollectionsView {} },
        }

        ToastFrame {}
    }
}
