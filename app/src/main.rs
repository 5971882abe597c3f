//! Salsi library web frontend.
//!
//! Set `SALSI_API_BASE` at build time to point the UI at a backend other than
//! the local development server.

mod api;
mod app;
mod components;

use tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(app::App);
}
