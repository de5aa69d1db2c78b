//! # pcl-core
//!
//! Core types for the `pcl` institute admin client.
//!
//! This crate has no I/O. It provides:
//! - Entity records mirrored from the backend JSON (courses, internships,
//!   projects, payments, project enrollments, internship applications)
//! - Status enums and the dashboard tab set
//! - The dashboard state model: tab controller, fetch tickets, filter
//!   predicates, and aggregate stats
//! - Public catalog filters
//! - Form validation and multipart payload construction
//! - Media URL resolution, CSV export, and the offer countdown

pub mod catalog;
pub mod countdown;
pub mod dashboard;
pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod form;
pub mod media;
pub mod text;
pub mod validation;

pub use errors::CoreError;
