//! # Text Extraction Desktop
//!
//! Native desktop client for the Text Extraction document-management backend.
//!
//! ## Architecture
//!
//! The application connects to a REST backend over HTTP and provides a
//! sidebar-navigated interface for uploading documents, running text
//! extraction jobs, and administrative reporting. All network calls run as
//! async tasks; the UI observes completion through signals and never blocks
//! on a request.
//!
//! ## Modules
//!
//! - [`config`] - Persisted application settings (API URL)
//! - [`components`] - Layout, sidebar, and header components
//! - [`router`] - Application routes (one per sidebar tab)
//! - [`state`] - Global application state and session handling
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod config;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting Text Extraction Desktop");

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Text Extraction")
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .with_min_inner_size(LogicalSize::new(900.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Initializes global state, loads the stylesheet, and renders the router.
#[component]
fn App() -> Element {
    // Provide global application state
    use_context_provider(AppState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
