//! Domain models for the Trail Finder platform

mod api;
mod chat;
mod trail;
mod weather;

pub use api::*;
pub use chat::*;
pub use trail::*;
pub use weather::*;
