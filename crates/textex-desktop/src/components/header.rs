//! # Header Component
//!
//! Application header: backend status on the left, session summary on the
//! right.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Application header component.
///
/// Shows which backend the client is pointed at and whether it is
/// reachable, plus the active session (username, role badge, last login)
/// with a logout shortcut.
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let connected = *state.connected.read();
    let api_url = state.api_url.read().clone();
    let session = state.session.read().clone();

    let on_logout = move |_| {
        state.logout();
    };

    rsx! {
        header {
            class: "app-header",

            div { class: "backend-summary",
                span {
                    class: if connected {
                        "status-indicator connected"
                    } else {
                        "status-indicator disconnected"
                    },
                }

                span { class: "mono backend-url", "{api_url}" }

                span { class: "text-secondary",
                    if connected { "reachable" } else { "unreachable" }
                }
            }

            match session {
                Some(session) => {
                    let initial = session.username.chars().next().unwrap_or('?').to_uppercase();
                    let role_class = if session.is_admin() {
                        "role-badge role-admin"
                    } else {
                        "role-badge"
                    };
                    rsx! {
                        div { class: "user-menu",
                            div { class: "user-avatar", "{initial}" }

                            div { class: "user-details",
                                span { class: "username", "{session.username}" }

                                if !session.last_login.is_empty() {
                                    span { class: "text-secondary last-login",
                                        "last login {session.last_login}"
                                    }
                                }
                            }

                            span { class: "{role_class}", "{session.role}" }

                            button {
                                class: "btn-sm btn-ghost",
                                onclick: on_logout,
                                "Logout"
                            }
                        }
                    }
                }
                None => rsx! {
                    Link {
                        class: "btn-sm btn-primary",
                        to: Route::Login {},
                        "Login"
                    }
                },
            }
        }
    }
}
