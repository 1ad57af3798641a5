//! # Sidebar Component
//!
//! Navigation sidebar for the application.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Navigation sidebar component.
///
/// One link per tab. The Admin link only appears for users with the
/// administrator role.
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                "Text Extraction"
            }

            div {
                class: "nav-links",

                Link {
                    to: Route::Home {},
                    class: "nav-link",
                    "Home"
                }

                Link {
                    to: Route::Upload {},
                    class: "nav-link",
                    "Upload"
                }

                Link {
                    to: Route::Extraction {},
                    class: "nav-link",
                    "Extraction"
                }

                if state.is_admin() {
                    Link {
                        to: Route::Admin {},
                        class: "nav-link",
                        "Admin"
                    }
                }

                Link {
                    to: Route::Settings {},
                    class: "nav-link",
                    "Settings"
                }

                Link {
                    to: Route::Profile {},
                    class: "nav-link",
                    "Profile"
                }
            }
        }
    }
}
