//! HTTP request handlers organized by domain

pub mod advice;
pub mod health;
pub mod projections;
pub mod simulations;

// Re-export all handlers for use in router
pub use advice::*;
pub use health::*;
pub use projections::*;
pub use simulations::*;
