//! HTTP request handlers

pub mod chat;
pub mod health;
pub mod images;
pub mod trails;
pub mod weather;

pub use chat::chat;
pub use health::health_check;
pub use images::{get_place_photo, get_trail_image, list_images};
pub use trails::{get_trail, list_trails};
pub use weather::get_weather;
