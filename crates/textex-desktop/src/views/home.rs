//! # Home View
//!
//! Dashboard listing the current user's documents.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Home dashboard view.
///
/// Shows the documents the logged-in user has uploaded. When not logged in,
/// points at the login view instead of firing unauthenticated requests.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();

    if !state.is_logged_in() {
        return rsx! {
            div {
                class: "home-view",

                h2 { "Welcome" }

                p { class: "text-secondary",
                    "Log in to see your documents and start extractions."
                }

                Link {
                    to: Route::Login {},
                    class: "btn-primary",
                    "Go to Login"
                }
            }
        };
    }

    let client = state.client();
    let documents = use_resource(move || {
        let client = client.clone();
        async move { client.my_documents().await }
    });

    rsx! {
        div {
            class: "home-view",

            div {
                class: "home-header",

                h2 { "My Documents" }

                Link {
                    to: Route::Upload {},
                    class: "btn-primary",
                    "+ Upload Document"
                }
            }

            match &*documents.read() {
                Some(Ok(items)) => rsx! {
                    div {
                        class: "document-list",

                        if items.is_empty() {
                            p { class: "text-secondary",
                                "You haven't uploaded any documents yet."
                            }
                        } else {
                            for doc in items.iter() {
                                div {
                                    class: "document-card",

                                    h3 { "{doc.file_name}" }

                                    div {
                                        class: "meta",

                                        span { "ID: {doc.id}" }

                                        if doc.size > 0 {
                                            span { " · {doc.size} bytes" }
                                        }

                                        if let Some(status) = &doc.status {
                                            span { " · {status}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div {
                        class: "error",
                        "Error loading documents: {err}"
                    }
                },
                None => rsx! {
                    div {
                        class: "loading",
                        "Loading documents..."
                    }
                },
            }
        }
    }
}
