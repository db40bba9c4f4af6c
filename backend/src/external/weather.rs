//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current weather endpoint and maps the
//! provider response into the internal `Weather` shape. Wind speed is
//! converted from m/s to km/h; cloud coverage stands in for rain
//! probability since the current-conditions endpoint has no `pop` field.

use reqwest::Client;
use serde::Deserialize;
use shared::Weather;

use crate::error::{AppError, AppResult};

/// OpenWeatherMap client
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmCondition>,
    main: OwmMain,
    wind: OwmWind,
    clouds: Option<OwmClouds>,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: i32,
}

impl OpenWeatherClient {
    /// Create a new client
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by coordinates
    pub async fn get_current_weather(&self, lat: f64, lng: f64) -> AppResult<Weather> {
        let url = format!(
            "{}/weather?lat={}&lon={}&units=metric&appid={}",
            self.base_url, lat, lng, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Weather API returned {}", status);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmCurrentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }
}

/// Convert an OpenWeatherMap current response to the internal format
fn convert_current_response(data: OwmCurrentResponse) -> Weather {
    let condition = data.weather.first();

    Weather {
        temperature: data.main.temp,
        feels_like: data.main.feels_like,
        humidity: data.main.humidity,
        // Provider reports m/s
        wind_speed: data.wind.speed * 3.6,
        rain_probability: data.clouds.map(|c| c.all).unwrap_or(0),
        condition: condition
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        icon: condition
            .map(|c| c.icon.clone())
            .unwrap_or_else(|| "01d".to_string()),
        alerts: vec![],
    }
}
