//! # Login View
//!
//! Username/password authentication against the backend.

use dioxus::prelude::*;

use textex_client::auth::hash_password;
use textex_client::LoginSession;

use crate::router::Route;
use crate::state::AppState;

/// Login view component.
///
/// Submits the credentials to the backend; on success the session is
/// persisted and the user is taken to the home view.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Already authenticated: nothing to do here
    if state.is_logged_in() {
        nav.push(Route::Home {});
    }

    let mut do_login = move || {
        let username_val = username.read().trim().to_string();
        let password_val = password.read().clone();

        if username_val.is_empty() {
            error.set(Some("Username is required".to_string()));
            return;
        }
        if password_val.is_empty() {
            error.set(Some("Password is required".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let client = state.client();

        spawn(async move {
            match client.login(&username_val, &password_val).await {
                Ok(profile) => {
                    let session = LoginSession::new(
                        profile.username,
                        profile.email,
                        profile.role,
                        hash_password(&password_val),
                    );
                    state.login(session);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    error.set(Some(format!("Login failed: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "login-view",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { "Text Extraction" }
                    p { class: "text-secondary", "Document Management" }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: "{username}",
                            disabled: *loading.read(),
                            oninput: move |evt| username.set(evt.value().clone()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            disabled: *loading.read(),
                            oninput: move |evt| password.set(evt.value().clone()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter && !*loading.read() {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        disabled: *loading.read(),
                        onclick: move |_| do_login(),
                        if *loading.read() {
                            "Signing In..."
                        } else {
                            "Sign In"
                        }
                    }

                    p { class: "login-hint text-secondary",
                        "Your password never leaves this machine in plaintext."
                    }
                }
            }
        }
    }
}
