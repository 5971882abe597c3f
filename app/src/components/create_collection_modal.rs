//! Name dialog for creating a collection.
//!
//! Non-blocking: the rest of the page keeps rendering while it is open. The
//! dialog resolves exactly once through `on_close`, with `Some(name)` on
//! confirm and `None` on cancel.

use dioxus::prelude::*;
use salsi_core::derive_collection_id;

#[component]
pub fn CreateCollectionModal(on_close: EventHandler<Option<String>>) -> Element {
    let mut name = use_signal(String::new);

    let preview = derive_collection_id(&name());
    let can_submit = !preview.is_empty();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(None),
            div {
                class: "create-collection-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "New collection" }
                    button {
                        class: "btn btn-close",
                        onclick: move |_| on_close.call(None),
                        "X"
                    }
                }

                div { class: "modal-content",
                    label { r#for: "collection-name", class: "field-header", "Name" }
                    input {
                        id: "collection-name",
                        r#type: "text",
                        class: "input",
                        autofocus: true,
                        placeholder: "e.g. Jogos de Terror",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        onkeydown: move |e| match e.key() {
                            Key::Enter if can_submit => on_close.call(Some(name())),
                            Key::Escape => on_close.call(None),
                            _ => {}
                        }
                    }
                    if can_submit {
                        p { class: "id-preview",
                            "ID: "
                            code { "{preview}" }
                        }
                    }
                }

                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit,
                        onclick: move |_| on_close.call(Some(name())),
                        "Create"
                    }
                }
            }
        }
    }
}
