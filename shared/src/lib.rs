//! Shared types and models for the Trail Finder platform
//!
//! This crate contains the domain types exchanged between the backend and
//! its clients, plus the pure hiking-suitability classifier.

pub mod models;
pub mod suitability;
pub mod types;
pub mod validation;

pub use models::*;
pub use suitability::*;
pub use types::*;
pub use validation::*;
