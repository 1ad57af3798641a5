//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{Admin, Extraction, Home, Login, Profile, Settings, Upload};

/// Application routes, one per sidebar tab.
///
/// All routes are wrapped in the [`Layout`] component which provides
/// the sidebar navigation and header.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Main layout wrapper for all routes.
    #[layout(Layout)]
    /// Home dashboard showing the user's documents.
    #[route("/")]
    Home {},

    /// User login.
    #[route("/login")]
    Login {},

    /// File upload with progress.
    #[route("/upload")]
    Upload {},

    /// Start extraction jobs and view their results.
    #[route("/extraction")]
    Extraction {},

    /// Administrative reporting (users, documents, extractions, statistics).
    #[route("/admin")]
    Admin {},

    /// Application settings (backend URL).
    #[route("/settings")]
    Settings {},

    /// Current session details and logout.
    #[route("/profile")]
    Profile {},
}
