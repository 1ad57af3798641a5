//! # Textex Client
//!
//! Client library for the Text Extraction REST backend.
//!
//! This crate carries everything the desktop application needs that is not
//! UI: the HTTP client, the typed API surface, Basic-Auth credential
//! handling, the on-disk session store, and a small compat scanner for
//! pulling fields out of loosely-shaped JSON bodies.
//!
//! ## Modules
//!
//! - [`client`] - Async HTTP client for the backend API
//! - [`auth`] - Password hashing and Basic-Auth headers
//! - [`session`] - Persistent login session (load/save/clear)
//! - [`scan`] - Compat JSON field scanner
//! - [`types`] - API request and response types
//! - [`error`] - Error types shared by API operations

pub mod auth;
pub mod client;
pub mod error;
pub mod scan;
pub mod session;
pub mod types;

pub use auth::Credentials;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use session::{LoginSession, SessionStore};
