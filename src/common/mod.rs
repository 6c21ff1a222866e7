// Common module - shared types and utilities across all modules

pub mod error;
pub mod extract;
pub mod migrations;
pub mod query;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use extract::JsonBody;
pub use query::{BindValue, ListParams, ListQuery, SortOrder};
pub use state::AppState;
pub use validation::{ValidationError, ValidationResult};
