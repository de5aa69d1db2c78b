//! # pcl-auth
//!
//! Admin session handling for the `pcl` CLI.
//!
//! The backend issues a bearer JWT from `/admin/login`. This crate persists
//! it together with the admin user (OS keyring, file fallback, env
//! override) and reads its expiry for status display. There is no refresh
//! flow; an expired session means logging in again.

pub mod error;
pub mod expiry;
pub mod session;
pub mod session_store;

pub use error::AuthError;
pub use session::Session;
pub use session_store::{SessionSource, SessionStore};
