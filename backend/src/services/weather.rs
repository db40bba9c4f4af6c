//! Weather lookup and suitability classification
//!
//! Fetches current conditions from the upstream weather API when a key is
//! configured; otherwise, or on any upstream failure, serves synthetic
//! weather so the endpoint never fails past parameter validation. Every
//! response carries the hiking-suitability verdict for the snapshot.

use std::sync::Arc;

use rand::Rng;
use shared::{classify_suitability, Weather, WeatherResponse};

use crate::external::OpenWeatherClient;
use crate::Config;

/// Weather service
#[derive(Clone)]
pub struct WeatherService {
    client: Option<OpenWeatherClient>,
}

/// Condition/icon pairs used by the synthetic generator
const SYNTHETIC_CONDITIONS: &[(&str, &str)] = &[
    ("clear sky", "01d"),
    ("few clouds", "02d"),
    ("scattered clouds", "03d"),
    ("overcast clouds", "04d"),
    ("light rain", "10d"),
];

impl WeatherService {
    /// Create a weather service from the application config
    pub fn new(http: reqwest::Client, config: Arc<Config>) -> Self {
        let client = config.weather.is_configured().then(|| {
            OpenWeatherClient::new(
                http,
                config.weather.api_key.clone(),
                config.weather.api_endpoint.clone(),
            )
        });
        Self { client }
    }

    /// Current weather plus suitability verdict for a location
    pub async fn current(&self, lat: f64, lng: f64) -> WeatherResponse {
        let weather = match &self.client {
            Some(client) => match client.get_current_weather(lat, lng).await {
                Ok(weather) => weather,
                Err(e) => {
                    tracing::warn!("Falling back to synthetic weather: {}", e);
                    synthetic_weather()
                }
            },
            None => synthetic_weather(),
        };

        let suitability = classify_suitability(&weather);
        WeatherResponse {
            weather,
            suitability,
        }
    }
}

/// Generate a plausible weather snapshot when no provider is available
pub fn synthetic_weather() -> Weather {
    let mut rng = rand::thread_rng();

    let (condition, icon) = SYNTHETIC_CONDITIONS[rng.gen_range(0..SYNTHETIC_CONDITIONS.len())];
    let temperature = rng.gen_range(15..=30) as f64;

    Weather {
        temperature,
        feels_like: temperature + rng.gen_range(-2..=2) as f64,
        humidity: rng.gen_range(40..=80),
        wind_speed: rng.gen_range(5..=25) as f64,
        rain_probability: rng.gen_range(0..=50),
        condition: condition.to_string(),
        icon: icon.to_string(),
        alerts: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SuitabilityStatus;

    #[test]
    fn test_synthetic_weather_stays_in_range() {
        for _ in 0..100 {
            let weather = synthetic_weather();
            assert!((15.0..=30.0).contains(&weather.temperature));
            assert!((weather.feels_like - weather.temperature).abs() <= 2.0);
            assert!((40..=80).contains(&weather.humidity));
            assert!((5.0..=25.0).contains(&weather.wind_speed));
            assert!((0..=50).contains(&weather.rain_probability));
            assert!(weather.alerts.is_empty());
            assert!(!weather.condition.is_empty());
        }
    }

    #[test]
    fn test_synthetic_weather_never_unsafe() {
        // The generator ranges sit below every unsafe threshold
        for _ in 0..100 {
            let verdict = classify_suitability(&synthetic_weather());
            assert_ne!(verdict.status, SuitabilityStatus::Unsafe);
        }
    }
}
