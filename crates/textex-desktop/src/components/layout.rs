//! # Layout Component
//!
//! Main application layout wrapper providing consistent structure.

use dioxus::prelude::*;

use super::{Header, Sidebar};
use crate::router::Route;
use crate::state::AppState;

/// Main layout wrapper component.
///
/// Provides the application shell with sidebar navigation and header.
/// All routed views are rendered inside the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |         Header                    |
/// |         |-----------------------------------|
/// |  Tabs   |                                   |
/// |         |         Main Content              |
/// |         |         (Outlet)                  |
/// |         |                                   |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let mut state = use_context::<AppState>();

    // Check backend reachability on startup
    use_effect(move || {
        let client = state.client();
        spawn(async move {
            match client.check_connection().await {
                Ok(true) => {
                    state.connected.set(true);
                    tracing::info!("Connected to backend");
                }
                Ok(false) => {
                    state.connected.set(false);
                    tracing::warn!("Backend responded with an error status");
                }
                Err(e) => {
                    state.connected.set(false);
                    tracing::warn!("Failed to reach backend: {}", e);
                }
            }
        });
    });

    rsx! {
        div {
            class: "app-layout",

            Sidebar {}

            div {
                class: "main-panel",

                Header {}

                main {
                    class: "content",

                    Outlet::<Route> {}
                }
            }
        }
    }
}
