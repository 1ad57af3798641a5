//! # Upload View
//!
//! File upload with a live progress bar.
//!
//! The upload itself runs on an async task; the progress callback writes to
//! shared atomics, and a small poller task folds them into a signal so the
//! UI keeps repainting while the transfer is in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use textex_client::client::ProgressFn;

use crate::state::AppState;

/// Upload view component.
#[component]
pub fn Upload() -> Element {
    let state = use_context::<AppState>();

    let mut path_input = use_signal(String::new);
    let mut uploading = use_signal(|| false);
    let mut progress = use_signal(|| 0.0f64);
    let mut outcome = use_signal(|| Option::<Result<String, String>>::None);

    let on_upload = move |_| {
        let path = path_input.read().trim().to_string();
        if path.is_empty() {
            outcome.set(Some(Err("File path is required".to_string())));
            return;
        }

        let client = state.client();
        uploading.set(true);
        progress.set(0.0);
        outcome.set(None);

        let sent = Arc::new(AtomicU64::new(0));
        let total = Arc::new(AtomicU64::new(0));

        let callback: ProgressFn = {
            let sent = Arc::clone(&sent);
            let total = Arc::clone(&total);
            Arc::new(move |s, t| {
                sent.store(s, Ordering::Relaxed);
                total.store(t, Ordering::Relaxed);
            })
        };

        // Poll the counters into the progress signal while the upload runs
        {
            let sent = Arc::clone(&sent);
            let total = Arc::clone(&total);
            spawn(async move {
                while *uploading.peek() {
                    let t = total.load(Ordering::Relaxed);
                    if t > 0 {
                        progress.set(sent.load(Ordering::Relaxed) as f64 / t as f64);
                    }
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            });
        }

        spawn(async move {
            match client.upload_file(&path, Some(callback)).await {
                Ok(receipt) => {
                    progress.set(1.0);
                    let message = receipt
                        .message
                        .or(receipt.file_name)
                        .unwrap_or_else(|| "Upload complete".to_string());
                    outcome.set(Some(Ok(message)));
                }
                Err(e) => {
                    outcome.set(Some(Err(e.to_string())));
                }
            }
            uploading.set(false);
        });
    };

    let percent = (*progress.read() * 100.0).round() as u32;

    rsx! {
        div {
            class: "upload-view",

            h2 { class: "mb-lg", "Upload Document" }

            div {
                class: "upload-form",

                div {
                    class: "form-group mb-md",

                    label { r#for: "file-path", "File Path" }
                    input {
                        id: "file-path",
                        r#type: "text",
                        placeholder: "/path/to/document.pdf",
                        value: "{path_input}",
                        disabled: *uploading.read(),
                        oninput: move |evt| path_input.set(evt.value().clone()),
                    }
                }

                button {
                    class: "btn-primary",
                    disabled: *uploading.read(),
                    onclick: on_upload,
                    if *uploading.read() { "Uploading..." } else { "Upload" }
                }

                if *uploading.read() || percent > 0 {
                    div {
                        class: "progress-track",

                        div {
                            class: "progress-fill",
                            style: "width: {percent}%",
                        }
                    }

                    div { class: "progress-label", "{percent}%" }
                }

                if let Some(result) = outcome.read().as_ref() {
                    match result {
                        Ok(msg) => rsx! {
                            div {
                                class: "alert alert-success",
                                "{msg}"
                            }
                        },
                        Err(msg) => rsx! {
                            div {
                                class: "alert alert-error",
                                "Upload failed: {msg}"
                            }
                        },
                    }
                }
            }
        }
    }
}
