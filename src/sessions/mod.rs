//! # Sessions Module
//!
//! Work sessions recorded against a project. Listing is scoped either by
//! project or, through the owning projects, by user.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::sessions_routes;
