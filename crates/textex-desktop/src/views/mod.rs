//! # Views
//!
//! Page-level view components, one per sidebar tab.
//!
//! - [`Home`] - Document dashboard
//! - [`Upload`] - File upload with progress
//! - [`Extraction`] - Start jobs and view extracted text
//! - [`Admin`] - Users / documents / extractions / statistics reporting
//! - [`Settings`] - Backend URL configuration
//! - [`Profile`] - Session details and logout
//! - [`Login`] - User authentication

mod admin;
mod extraction;
mod home;
mod login;
mod profile;
mod settings;
mod upload;

pub use admin::Admin;
pub use extraction::Extraction;
pub use home::Home;
pub use login::Login;
pub use profile::Profile;
pub use settings::Settings;
pub use upload::Upload;
