//! Weather data models

use serde::{Deserialize, Serialize};

use crate::types::AlertSeverity;

/// A weather alert issued by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    /// Free-text alert category, e.g. "flood"
    pub kind: String,
    pub severity: AlertSeverity,
    pub message: String,
}

/// A snapshot of current atmospheric conditions at a trail location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Ambient temperature in degrees Celsius
    pub temperature: f64,
    /// Apparent temperature in degrees Celsius
    pub feels_like: f64,
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Chance of rain as a percentage
    pub rain_probability: i32,
    /// Free-text description, e.g. "light rain"
    pub condition: String,
    /// Provider icon code
    pub icon: String,
    /// Active alerts in provider order; empty when none
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}
