//! # Extraction View
//!
//! Start extraction jobs for uploaded documents and view their results.

use dioxus::prelude::*;

use textex_client::types::ExtractionStatus;

use crate::state::AppState;

/// Extraction view component.
///
/// Lists the user's documents, starts a job for the selected one, and
/// fetches the result on demand. Jobs run server-side, so "fetch" is a plain
/// re-request rather than a live stream.
#[component]
pub fn Extraction() -> Element {
    let state = use_context::<AppState>();

    let mut selected = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut status_line = use_signal(|| Option::<Result<String, String>>::None);
    let mut extracted_text = use_signal(String::new);

    let client = state.client();
    let documents = use_resource(move || {
        let client = client.clone();
        async move { client.my_documents().await }
    });

    let on_start = move |_| {
        let id = selected.read().clone();
        if id.is_empty() {
            status_line.set(Some(Err("Select a document first".to_string())));
            return;
        }

        let client = state.client();
        busy.set(true);
        status_line.set(None);
        extracted_text.set(String::new());

        spawn(async move {
            match client.start_extraction(&id).await {
                Ok(()) => {
                    status_line.set(Some(Ok(format!("Extraction started for {}", id))));
                }
                Err(e) => {
                    status_line.set(Some(Err(format!("Failed to start extraction: {}", e))));
                }
            }
            busy.set(false);
        });
    };

    let on_fetch = move |_| {
        let id = selected.read().clone();
        if id.is_empty() {
            status_line.set(Some(Err("Select a document first".to_string())));
            return;
        }

        let client = state.client();
        busy.set(true);
        status_line.set(None);

        spawn(async move {
            match client.extraction_result(&id).await {
                Ok(result) => match result.status {
                    ExtractionStatus::Completed => {
                        extracted_text.set(result.text);
                        status_line.set(Some(Ok("Extraction completed".to_string())));
                    }
                    ExtractionStatus::Failed => {
                        let message = result
                            .message
                            .unwrap_or_else(|| "extraction failed".to_string());
                        status_line.set(Some(Err(message)));
                    }
                    ExtractionStatus::Pending | ExtractionStatus::Processing => {
                        status_line.set(Some(Ok(
                            "Extraction still running, try again shortly".to_string()
                        )));
                    }
                },
                Err(e) => {
                    status_line.set(Some(Err(format!("Failed to fetch result: {}", e))));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "extraction-view",

            h2 { class: "mb-lg", "Text Extraction" }

            div {
                class: "extraction-controls",

                div {
                    class: "form-group mb-md",

                    label { r#for: "document", "Document" }

                    select {
                        id: "document",
                        disabled: *busy.read(),
                        onchange: move |evt| selected.set(evt.value().clone()),

                        option { value: "", "Select a document..." }

                        match &*documents.read() {
                            Some(Ok(items)) => rsx! {
                                for doc in items.iter() {
                                    option {
                                        value: "{doc.id}",
                                        "{doc.file_name} ({doc.id})"
                                    }
                                }
                            },
                            _ => rsx! {},
                        }
                    }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        disabled: *busy.read(),
                        onclick: on_start,
                        "Start Extraction"
                    }

                    button {
                        class: "btn-success",
                        disabled: *busy.read(),
                        onclick: on_fetch,
                        "Fetch Result"
                    }
                }

                if let Some(line) = status_line.read().as_ref() {
                    match line {
                        Ok(msg) => rsx! {
                            div { class: "alert alert-success", "{msg}" }
                        },
                        Err(msg) => rsx! {
                            div { class: "alert alert-error", "{msg}" }
                        },
                    }
                }
            }

            if !extracted_text.read().is_empty() {
                div {
                    class: "extraction-result",

                    h3 { class: "mb-md", "Extracted Text" }

                    pre {
                        class: "extracted-text",
                        "{extracted_text}"
                    }
                }
            }
        }
    }
}
