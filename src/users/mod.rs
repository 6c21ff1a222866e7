//! # Users Module
//!
//! Identity-provider backed user records. Creation is a find-or-create keyed
//! on email so the first-sign-in flow can be retried safely.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::users_routes;
