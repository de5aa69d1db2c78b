pub mod application;
pub mod auth;
pub mod catalog;
pub mod course;
pub mod internship;
pub mod payment;
pub mod project;
pub mod submit;

pub use application::ApplicationCommands;
pub use auth::AuthCommands;
pub use catalog::CatalogCommands;
pub use course::CourseCommands;
pub use internship::InternshipCommands;
pub use payment::PaymentCommands;
pub use project::ProjectCommands;
pub use submit::{ApplyCommands, EnrollCommands, PayCommands};
