//! # Settings View
//!
//! Backend connection settings and session storage details.

use dioxus::prelude::*;

use textex_client::{ApiClient, SessionStore};

use crate::state::AppState;

/// Settings view component.
///
/// The URL field accepts anything the client can normalize: trailing
/// slashes and a trailing `/api` segment are stripped, and the effective
/// base URL is previewed before saving. Also shows where the login session
/// is persisted on disk.
#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<AppState>();
    let mut url_input = use_signal(|| state.api_url.read().clone());
    let mut testing = use_signal(|| false);
    let mut test_result = use_signal(|| Option::<Result<u16, String>>::None);

    // Preview what the entered URL normalizes to
    let effective_url = ApiClient::new(url_input.read().clone())
        .base_url()
        .to_string();

    let session_store = SessionStore::new();
    let session_path = session_store.path().display().to_string();
    let username = state.username();

    let on_save = move |_| {
        let normalized = ApiClient::new(url_input.read().trim().to_string())
            .base_url()
            .to_string();
        url_input.set(normalized.clone());
        state.set_api_url(normalized);
        state.save_config();
        test_result.set(None);
    };

    let on_test = move |_| {
        let client = ApiClient::new(url_input.read().trim().to_string());
        testing.set(true);
        test_result.set(None);

        spawn(async move {
            match client.check_connection().await {
                Ok(true) => {
                    state.connected.set(true);
                    test_result.set(Some(Ok(200)));
                }
                Ok(false) => {
                    state.connected.set(false);
                    test_result.set(Some(Err(
                        "Backend answered, but with an error status".to_string()
                    )));
                }
                Err(e) => {
                    state.connected.set(false);
                    test_result.set(Some(Err(e.to_string())));
                }
            }
            testing.set(false);
        });
    };

    rsx! {
        div {
            class: "settings-view",

            h2 { class: "mb-lg", "Settings" }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Backend" }

                div {
                    class: "form-group",

                    label { r#for: "api-url", "API URL" }

                    input {
                        id: "api-url",
                        r#type: "text",
                        placeholder: "http://127.0.0.1:5000",
                        value: "{url_input}",
                        oninput: move |evt| url_input.set(evt.value().clone()),
                    }

                    // Requests go to {base}/api/..., so entering the /api
                    // suffix by hand is harmless.
                    p { class: "text-secondary field-hint",
                        "Requests will be sent to "
                        span { class: "mono", "{effective_url}/api/…" }
                    }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        onclick: on_save,
                        "Save"
                    }

                    button {
                        class: "btn-success",
                        disabled: *testing.read(),
                        onclick: on_test,
                        if *testing.read() { "Testing..." } else { "Test Connection" }
                    }
                }

                if let Some(result) = test_result.read().as_ref() {
                    match result {
                        Ok(_) => rsx! {
                            div { class: "alert alert-success",
                                "Backend is reachable."
                            }
                        },
                        Err(msg) => rsx! {
                            div { class: "alert alert-error",
                                "Connection failed: {msg}"
                            }
                        },
                    }
                }
            }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Session Storage" }

                div { class: "settings-row",
                    strong { "Session file: " }
                    span { class: "mono", "{session_path}" }
                }

                div { class: "settings-row",
                    strong { "Active session: " }
                    match username {
                        Some(name) => rsx! { span { class: "text-success", "{name}" } },
                        None => rsx! { span { class: "text-secondary", "none" } },
                    }
                }

                p { class: "text-secondary field-hint",
                    "The session file is rewritten on every login and logout. \
                     Logging out clears it."
                }
            }
        }
    }
}
