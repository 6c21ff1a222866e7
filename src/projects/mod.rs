//! # Projects Module
//!
//! User-owned projects with activity/time-tracking flags. Project names are
//! globally unique, so creation is a find-or-create keyed on name.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::projects_routes;
