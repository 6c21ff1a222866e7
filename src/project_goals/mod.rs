//! # Project Goals Module
//!
//! Goals attached to a project, each carrying a workflow status
//! (pending / on progress / completed).

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::project_goals_routes;
