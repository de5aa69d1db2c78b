pub mod application;
pub mod auth;
pub mod catalog;
pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod internship;
pub mod offer;
pub mod project;
pub mod shared;
pub mod submit;
