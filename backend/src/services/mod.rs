//! Business logic services

pub mod chat;
pub mod fixtures;
pub mod photos;
pub mod trails;
pub mod weather;
