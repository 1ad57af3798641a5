//! # Admin View
//!
//! Administrative reporting: users, documents, extractions, and aggregate
//! statistics, plus user management forms.

use dioxus::prelude::*;

use textex_client::auth::hash_password;
use textex_client::types::{CreateUserRequest, UpdateUserRequest};

use crate::state::AppState;

/// Admin sub-tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Documents,
    Extractions,
    Statistics,
}

/// Admin view component.
///
/// Only reachable through the sidebar for users with the administrator role;
/// the backend enforces authorization regardless.
#[component]
pub fn Admin() -> Element {
    let state = use_context::<AppState>();
    let mut tab = use_signal(|| AdminTab::Users);

    rsx! {
        div {
            class: "admin-view",

            h2 { class: "mb-lg", "Administration" }

            div {
                class: "admin-tabs",

                for (label, value) in [
                    ("Users", AdminTab::Users),
                    ("Documents", AdminTab::Documents),
                    ("Extractions", AdminTab::Extractions),
                    ("Statistics", AdminTab::Statistics),
                ] {
                    button {
                        class: if *tab.read() == value { "tab-button active" } else { "tab-button" },
                        onclick: move |_| tab.set(value),
                        "{label}"
                    }
                }
            }

            match *tab.read() {
                AdminTab::Users => rsx! { AdminUsers {} },
                AdminTab::Documents => rsx! { AdminDocuments {} },
                AdminTab::Extractions => rsx! { AdminExtractions {} },
                AdminTab::Statistics => rsx! { AdminStatistics {} },
            }
        }
    }
}

/// User management: list, create, and role changes.
#[component]
fn AdminUsers() -> Element {
    let state = use_context::<AppState>();
    let mut users = use_resource(move || {
        let client = state.client();
        async move { client.admin_users().await }
    });

    let mut new_username = use_signal(String::new);
    let mut new_email = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let on_create = move |_| {
        let username = new_username.read().trim().to_string();
        let email = new_email.read().trim().to_string();
        let password = new_password.read().clone();

        if username.is_empty() || password.is_empty() {
            error_msg.set(Some("Username and password are required".to_string()));
            return;
        }

        let client = state.client();
        creating.set(true);
        error_msg.set(None);

        spawn(async move {
            let req = CreateUserRequest {
                username,
                email,
                role: "User".to_string(),
                password: hash_password(&password),
            };
            match client.admin_create_user(&req).await {
                Ok(_) => {
                    new_username.set(String::new());
                    new_email.set(String::new());
                    new_password.set(String::new());
                    users.restart();
                }
                Err(e) => {
                    error_msg.set(Some(e.to_string()));
                }
            }
            creating.set(false);
        });
    };

    let mut on_toggle_role = move |user_id: String, current_role: String| {
        let client = state.client();
        let new_role = if current_role.eq_ignore_ascii_case("admin") {
            "User"
        } else {
            "Admin"
        }
        .to_string();

        spawn(async move {
            let req = UpdateUserRequest {
                role: Some(new_role),
                ..Default::default()
            };
            match client.admin_update_user(&user_id, &req).await {
                Ok(_) => users.restart(),
                Err(e) => error_msg.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "admin-section",

            h3 { class: "mb-md", "Users" }

            if let Some(err) = error_msg.read().as_ref() {
                div { class: "alert alert-error mb-md", "{err}" }
            }

            match &*users.read() {
                Some(Ok(items)) => rsx! {
                    table {
                        class: "admin-table",

                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Role" }
                                th { "Active" }
                                th { "" }
                            }
                        }

                        tbody {
                            for user in items.iter() {
                                tr {
                                    td { "{user.username}" }
                                    td { "{user.email}" }
                                    td { "{user.role}" }
                                    td { if user.active { "Yes" } else { "No" } }
                                    td {
                                        button {
                                            class: "btn-sm btn-ghost",
                                            onclick: {
                                                let id = user.id.clone();
                                                let role = user.role.clone();
                                                move |_| on_toggle_role(id.clone(), role.clone())
                                            },
                                            if user.role.eq_ignore_ascii_case("admin") {
                                                "Demote"
                                            } else {
                                                "Promote"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading users: {err}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading users..." }
                },
            }

            h3 { class: "mb-md", "Create User" }

            div {
                class: "create-user-form",

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: "{new_username}",
                    disabled: *creating.read(),
                    oninput: move |evt| new_username.set(evt.value().clone()),
                }

                input {
                    r#type: "text",
                    placeholder: "Email",
                    value: "{new_email}",
                    disabled: *creating.read(),
                    oninput: move |evt| new_email.set(evt.value().clone()),
                }

                input {
                    r#type: "password",
                    placeholder: "Initial password",
                    value: "{new_password}",
                    disabled: *creating.read(),
                    oninput: move |evt| new_password.set(evt.value().clone()),
                }

                button {
                    class: "btn-primary",
                    disabled: *creating.read(),
                    onclick: on_create,
                    if *creating.read() { "Creating..." } else { "Create" }
                }
            }
        }
    }
}

/// All documents across users.
#[component]
fn AdminDocuments() -> Element {
    let state = use_context::<AppState>();
    let documents = use_resource(move || {
        let client = state.client();
        async move { client.admin_documents().await }
    });

    rsx! {
        div {
            class: "admin-section",

            h3 { class: "mb-md", "Documents" }

            match &*documents.read() {
                Some(Ok(items)) => rsx! {
                    table {
                        class: "admin-table",

                        thead {
                            tr {
                                th { "ID" }
                                th { "File" }
                                th { "Size" }
                                th { "Status" }
                            }
                        }

                        tbody {
                            for doc in items.iter() {
                                tr {
                                    td { "{doc.id}" }
                                    td { "{doc.file_name}" }
                                    td { "{doc.size}" }
                                    td { {doc.status.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading documents: {err}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading documents..." }
                },
            }
        }
    }
}

/// All extraction jobs.
#[component]
fn AdminExtractions() -> Element {
    let state = use_context::<AppState>();
    let extractions = use_resource(move || {
        let client = state.client();
        async move { client.admin_extractions().await }
    });

    rsx! {
        div {
            class: "admin-section",

            h3 { class: "mb-md", "Extractions" }

            match &*extractions.read() {
                Some(Ok(items)) => rsx! {
                    table {
                        class: "admin-table",

                        thead {
                            tr {
                                th { "ID" }
                                th { "Document" }
                                th { "User" }
                                th { "Status" }
                            }
                        }

                        tbody {
                            for job in items.iter() {
                                tr {
                                    td { "{job.id}" }
                                    td { "{job.document_id}" }
                                    td { "{job.username}" }
                                    td { "{job.status:?}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading extractions: {err}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading extractions..." }
                },
            }
        }
    }
}

/// Aggregate statistics cards.
#[component]
fn AdminStatistics() -> Element {
    let state = use_context::<AppState>();
    let statistics = use_resource(move || {
        let client = state.client();
        async move { client.admin_statistics().await }
    });

    rsx! {
        div {
            class: "admin-section",

            h3 { class: "mb-md", "Statistics" }

            match &*statistics.read() {
                Some(Ok(stats)) => rsx! {
                    div {
                        class: "stats-grid",

                        for (label, value) in [
                            ("Total Users", stats.total_users),
                            ("Active Users", stats.active_users),
                            ("Documents", stats.total_documents),
                            ("Extractions", stats.total_extractions),
                        ] {
                            div {
                                class: "stat-card",

                                div { class: "stat-value", "{value}" }
                                div { class: "stat-label", "{label}" }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading statistics: {err}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading statistics..." }
                },
            }
        }
    }
}
