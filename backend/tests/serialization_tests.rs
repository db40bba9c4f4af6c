//! Wire format tests
//!
//! The JSON contract is camelCase object keys with lowercase difficulty and
//! kebab-case trail type values. These tests pin the shapes clients depend on.

use serde_json::{json, Value};
use shared::{
    classify_suitability, Coordinates, Difficulty, Trail, TrailFacilities, TrailLocation,
    TrailStats, TrailType, TrailsResponse, Weather, WeatherResponse,
};

fn sample_trail() -> Trail {
    Trail {
        id: "1".to_string(),
        place_id: None,
        name: "Southern Ridges".to_string(),
        description: "A 10km trail connecting five parks".to_string(),
        location: TrailLocation {
            city: "Southern Singapore".to_string(),
            state: "Singapore".to_string(),
            country: "Singapore".to_string(),
            coordinates: Coordinates::new(1.2789, 103.8189),
        },
        stats: TrailStats {
            distance: 10.0,
            elevation_gain: 120.0,
            estimated_time: 210,
            difficulty: Difficulty::Easy,
            trail_type: TrailType::PointToPoint,
        },
        facilities: TrailFacilities {
            parking: true,
            toilets: true,
            water_points: true,
            campsites: false,
        },
        safety_notes: vec!["Bring sun protection".to_string()],
        path: vec![Coordinates::new(1.2713, 103.8190)],
        images: vec!["/api/place-photo?query=Southern%20Ridges".to_string()],
        rating: 4.6,
        review_count: 4231,
    }
}

#[test]
fn test_trail_serializes_camel_case() {
    let value = serde_json::to_value(sample_trail()).unwrap();

    assert_eq!(value["stats"]["elevationGain"], json!(120.0));
    assert_eq!(value["stats"]["estimatedTime"], json!(210));
    assert_eq!(value["stats"]["difficulty"], json!("easy"));
    assert_eq!(value["stats"]["trailType"], json!("point-to-point"));
    assert_eq!(value["facilities"]["waterPoints"], json!(true));
    assert_eq!(value["reviewCount"], json!(4231));
    assert_eq!(value["safetyNotes"], json!(["Bring sun protection"]));
    assert_eq!(value["location"]["coordinates"]["lat"], json!(1.2789));
}

#[test]
fn test_absent_place_id_is_omitted() {
    let value = serde_json::to_value(sample_trail()).unwrap();
    assert!(value.get("placeId").is_none());

    let mut trail = sample_trail();
    trail.place_id = Some("ChIJ123".to_string());
    let value = serde_json::to_value(trail).unwrap();
    assert_eq!(value["placeId"], json!("ChIJ123"));
}

#[test]
fn test_difficulty_and_trail_type_values() {
    assert_eq!(
        serde_json::to_string(&Difficulty::Moderate).unwrap(),
        "\"moderate\""
    );
    assert_eq!(
        serde_json::to_string(&TrailType::OutAndBack).unwrap(),
        "\"out-and-back\""
    );
    assert_eq!(serde_json::to_string(&TrailType::Loop).unwrap(), "\"loop\"");

    let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(parsed, Difficulty::Hard);
}

#[test]
fn test_trails_response_shape() {
    let response = TrailsResponse {
        trails: vec![sample_trail()],
        total: 1,
    };
    let value = serde_json::to_value(response).unwrap();

    assert_eq!(value["total"], json!(1));
    assert_eq!(value["trails"].as_array().unwrap().len(), 1);
}

#[test]
fn test_weather_deserializes_without_alerts_field() {
    let json = r#"{
        "temperature": 28.5,
        "feelsLike": 32.0,
        "humidity": 78,
        "windSpeed": 14.4,
        "rainProbability": 40,
        "condition": "scattered clouds",
        "icon": "03d"
    }"#;

    let weather: Weather = serde_json::from_str(json).unwrap();
    assert_eq!(weather.feels_like, 32.0);
    assert_eq!(weather.rain_probability, 40);
    assert!(weather.alerts.is_empty());
}

#[test]
fn test_weather_response_carries_verdict() {
    let weather: Weather = serde_json::from_str(
        r#"{
            "temperature": 37.0,
            "feelsLike": 41.0,
            "humidity": 70,
            "windSpeed": 10.0,
            "rainProbability": 10,
            "condition": "sunny",
            "icon": "01d"
        }"#,
    )
    .unwrap();

    let suitability = classify_suitability(&weather);
    let value = serde_json::to_value(WeatherResponse {
        weather,
        suitability,
    })
    .unwrap();

    assert_eq!(value["suitability"]["status"], json!("caution"));
    assert_eq!(
        value["suitability"]["reasons"],
        json!(["Hot temperatures - stay hydrated"])
    );
    assert_eq!(value["weather"]["feelsLike"], json!(41.0));
}

#[test]
fn test_trail_round_trips_through_json() {
    let trail = sample_trail();
    let encoded = serde_json::to_string(&trail).unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded["name"], json!("Southern Ridges"));
    let reparsed: Trail = serde_json::from_value(decoded).unwrap();
    assert_eq!(reparsed.stats.trail_type, TrailType::PointToPoint);
    assert_eq!(reparsed.facilities.campsites, false);
}
