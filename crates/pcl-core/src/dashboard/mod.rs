//! Admin dashboard data-and-filter state.
//!
//! [`DashboardState`] owns the six collections and the active tab, search
//! term, and status filter. Lists shown to the user are always derived from
//! the latest successful fetch through the pure predicates in [`filter`];
//! aggregates come from [`stats`].

pub mod filter;
mod state;
pub mod stats;

pub use state::{DashboardState, FetchOutcome, FetchTicket, StatusChoice, TabData};
pub use stats::{DashboardStats, StatusCounts};
