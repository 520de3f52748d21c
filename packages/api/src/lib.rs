//! # API crate — the HTTP collaborator for the ProjectHub front-end
//!
//! Every network operation the dashboards, notification center and auth flow
//! need lives here, as thin typed wrappers over a shared [`ApiClient`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest` client with injected [`Session`] (bearer token, 401 handling) |
//! | [`auth`] | Login / logout / `GET /api/users/me` |
//! | `notifications` | Notification list and read PATCHes; implements [`store::NotificationApi`] |
//! | `dashboard` | Role-specific summary fetches; implements [`store::DashboardApi`] |
//! | [`files`] | Multipart upload, authenticated download, listings |
//!
//! The `store` crate's collaborator traits are implemented on [`ApiClient`],
//! so the core never names reqwest and tests can swap in
//! [`store::MemoryApi`].

pub mod auth;
pub mod client;
mod dashboard;
pub mod files;
mod notifications;

mod error;
pub use error::ApiError;

pub use auth::{LoginRequest, LoginResponse};
pub use client::{ApiClient, Session};
pub use files::{DownloadedFile, UploadTarget};
