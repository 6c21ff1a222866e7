//! # Session Goals Module
//!
//! Goals attached to a single work session, each carrying a workflow status
//! (pending / on progress / completed).

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::session_goals_routes;
