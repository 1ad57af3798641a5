//! # Profile View
//!
//! Details of the active session and logout.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Profile view component.
#[component]
pub fn Profile() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let Some(session) = state.session.read().clone() else {
        return rsx! {
            div {
                class: "profile-view",

                h2 { "Profile" }

                p { class: "text-secondary", "You are not logged in." }

                Link {
                    to: Route::Login {},
                    class: "btn-primary",
                    "Go to Login"
                }
            }
        };
    };

    let on_logout = move |_| {
        state.logout();
        nav.push(Route::Login {});
    };

    rsx! {
        div {
            class: "profile-view",

            h2 { class: "mb-lg", "Profile" }

            div {
                class: "profile-card",

                div { class: "profile-avatar",
                    "{session.username.chars().next().unwrap_or('?').to_uppercase()}"
                }

                div {
                    class: "profile-fields",

                    div {
                        strong { "Username: " }
                        span { "{session.username}" }
                    }

                    div {
                        strong { "Email: " }
                        span {
                            if session.email.is_empty() { "not set" } else { "{session.email}" }
                        }
                    }

                    div {
                        strong { "Role: " }
                        span { "{session.role}" }
                    }

                    div {
                        strong { "Last login: " }
                        span {
                            if session.last_login.is_empty() { "unknown" } else { "{session.last_login}" }
                        }
                    }
                }

                button {
                    class: "btn-ghost",
                    onclick: on_logout,
                    "Logout"
                }
            }
        }
    }
}
