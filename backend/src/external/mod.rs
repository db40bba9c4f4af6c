//! External API integrations

pub mod gemini;
pub mod image_search;
pub mod places;
pub mod weather;

pub use gemini::GeminiClient;
pub use image_search::ImageSearchClient;
pub use places::PlacesClient;
pub use weather::OpenWeatherClient;
