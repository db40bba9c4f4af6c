//! Trail discovery
//!
//! Reshapes places-provider results into the internal `Trail` schema. The
//! provider knows nothing about hiking statistics, so distance, elevation,
//! time and facilities are synthesized deterministically from the place id:
//! the same place always yields the same stats across requests.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{Coordinates, Difficulty, Trail, TrailFacilities, TrailLocation, TrailStats, TrailType};

use crate::external::places::{PlacePhoto, PlaceResult};
use crate::external::PlacesClient;
use crate::services::fixtures;
use crate::services::photos::seed_hash;
use crate::Config;

/// Most trails returned per search
const MAX_RESULTS: usize = 20;

/// Proxied photos attached to each trail
const PHOTOS_PER_TRAIL: usize = 2;

/// Trail search service
#[derive(Clone)]
pub struct TrailService {
    places: Option<PlacesClient>,
}

impl TrailService {
    /// Create a trail service from the application config
    pub fn new(http: reqwest::Client, config: Arc<Config>) -> Self {
        let places = config.google.is_configured().then(|| {
            PlacesClient::new(
                http,
                config.google.maps_api_key.clone(),
                config.google.places_endpoint.clone(),
            )
        });
        Self { places }
    }

    /// Search for trails by text query or near a coordinate.
    ///
    /// Without a places key the built-in fixtures are served, filtered by
    /// the query when one is given.
    pub async fn search(
        &self,
        query: Option<&str>,
        near: Option<Coordinates>,
    ) -> crate::error::AppResult<Vec<Trail>> {
        let places = match &self.places {
            Some(places) => places,
            None => return Ok(fixtures::sample_trails(query)),
        };

        let results = match (query, near) {
            (Some(q), _) => {
                let search_query = format!("hiking trails {}", q);
                places.text_search(&search_query).await?
            }
            (None, Some(coords)) => {
                places
                    .nearby_search(coords.lat, coords.lng, "hiking trail")
                    .await?
            }
            (None, None) => {
                places
                    .text_search("popular hiking trails nature reserve")
                    .await?
            }
        };

        Ok(results
            .into_iter()
            .take(MAX_RESULTS)
            .map(place_to_trail)
            .collect())
    }
}

/// Convert a places-provider result into a trail
pub fn place_to_trail(place: PlaceResult) -> Trail {
    let id = format!(
        "place-{}",
        place.place_id.chars().take(12).collect::<String>()
    );
    let difficulty = estimate_difficulty(&place);
    let (city, state, country) = split_address(&place.formatted_address);
    let images = photo_urls(&place);

    let mut rng = StdRng::seed_from_u64(seed_hash(&place.place_id));
    let location = place.geometry.location;

    let rating = place
        .rating
        .unwrap_or_else(|| 4.0 + rng.gen_range(0.0..0.9));
    let review_count = place
        .user_ratings_total
        .unwrap_or_else(|| rng.gen_range(100..=2100));

    Trail {
        id,
        place_id: Some(place.place_id),
        description: format!(
            "Explore {} located in {}. This is a popular hiking destination with beautiful natural scenery.",
            place.name, place.formatted_address
        ),
        name: place.name,
        location: TrailLocation {
            city,
            state,
            country,
            coordinates: location,
        },
        stats: TrailStats {
            distance: (rng.gen_range(3.0..=15.0_f64) * 10.0).round() / 10.0,
            elevation_gain: rng.gen_range(50.0..=550.0_f64).round(),
            estimated_time: rng.gen_range(60..=240),
            difficulty,
            trail_type: TrailType::Loop,
        },
        facilities: TrailFacilities {
            parking: true,
            toilets: rng.gen_bool(0.7),
            water_points: rng.gen_bool(0.5),
            campsites: rng.gen_bool(0.3),
        },
        safety_notes: vec![
            "Check local conditions before visiting".to_string(),
            "Bring adequate water and supplies".to_string(),
            "Wear appropriate hiking footwear".to_string(),
        ],
        path: vec![
            location,
            Coordinates::new(location.lat + 0.005, location.lng + 0.005),
            Coordinates::new(location.lat + 0.01, location.lng),
        ],
        images,
        rating,
        review_count,
    }
}

/// Guess a difficulty from the provider's place categories and name
fn estimate_difficulty(place: &PlaceResult) -> Difficulty {
    let mut difficulty = Difficulty::Moderate;

    if let Some(types) = &place.types {
        if types.iter().any(|t| t == "park") {
            difficulty = Difficulty::Easy;
        }
        if types.iter().any(|t| t == "natural_feature") {
            difficulty = Difficulty::Moderate;
        }
    }

    let name = place.name.to_lowercase();
    if name.contains("mountain") || name.contains("peak") {
        difficulty = Difficulty::Hard;
    }

    difficulty
}

/// Split a formatted address into (city, state, country)
fn split_address(formatted_address: &str) -> (String, String, String) {
    let parts: Vec<&str> = formatted_address.split(", ").collect();

    let country = parts
        .last()
        .filter(|p| !p.is_empty())
        .unwrap_or(&"Unknown")
        .to_string();
    let state = if parts.len() > 2 {
        parts[parts.len() - 2].to_string()
    } else {
        String::new()
    };
    let city = if parts.len() > 3 {
        parts[parts.len() - 3].to_string()
    } else {
        parts.first().copied().unwrap_or("").to_string()
    };

    (city, state, country)
}

/// Build proxied photo URLs for a place, padding with query-based lookups
/// when the provider has fewer photos than we want.
fn photo_urls(place: &PlaceResult) -> Vec<String> {
    let mut images = Vec::with_capacity(PHOTOS_PER_TRAIL);

    if let Some(photos) = &place.photos {
        for (index, photo) in photos.iter().take(PHOTOS_PER_TRAIL).enumerate() {
            images.push(photo_ref_url(photo, &place.place_id, index));
        }
    }

    while images.len() < PHOTOS_PER_TRAIL {
        images.push(format!(
            "/api/place-photo?query={}&placeId={}&index={}",
            urlencoding::encode(&place.name),
            place.place_id,
            images.len()
        ));
    }

    images
}

fn photo_ref_url(photo: &PlacePhoto, place_id: &str, index: usize) -> String {
    format!(
        "/api/place-photo?photoRef={}&placeId={}&index={}",
        urlencoding::encode(&photo.photo_reference),
        place_id,
        index
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::places::PlaceGeometry;

    fn place(name: &str, types: &[&str]) -> PlaceResult {
        PlaceResult {
            place_id: "ChIJd7zN_thz2jERcZJ5lHHa1234".to_string(),
            name: name.to_string(),
            formatted_address: "Bukit Timah, Singapore 589630, Singapore".to_string(),
            geometry: PlaceGeometry {
                location: Coordinates::new(1.3547, 103.7765),
            },
            rating: Some(4.7),
            user_ratings_total: Some(2876),
            photos: None,
            types: Some(types.iter().map(|t| t.to_string()).collect()),
        }
    }

    #[test]
    fn test_difficulty_park_is_easy() {
        assert_eq!(
            estimate_difficulty(&place("City Park", &["park"])),
            Difficulty::Easy
        );
    }

    #[test]
    fn test_difficulty_defaults_to_moderate() {
        assert_eq!(
            estimate_difficulty(&place("Reservoir Walk", &[])),
            Difficulty::Moderate
        );
    }

    #[test]
    fn test_difficulty_mountain_name_is_hard() {
        assert_eq!(
            estimate_difficulty(&place("Eagle Mountain Park", &["park"])),
            Difficulty::Hard
        );
        assert_eq!(
            estimate_difficulty(&place("Sunset Peak", &[])),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_split_address() {
        let (city, state, country) =
            split_address("Central Catchment, Singapore 574325, Singapore");
        assert_eq!(city, "Central Catchment");
        assert_eq!(state, "Singapore 574325");
        assert_eq!(country, "Singapore");

        let (city, state, country) = split_address("Yosemite Village, CA, United States");
        assert_eq!(city, "Yosemite Village");
        assert_eq!(state, "CA");
        assert_eq!(country, "United States");

        let (city, state, country) = split_address("Somewhere");
        assert_eq!(city, "Somewhere");
        assert_eq!(state, "");
        assert_eq!(country, "Somewhere");
    }

    #[test]
    fn test_place_to_trail_is_deterministic() {
        let first = place_to_trail(place("Bukit Timah Nature Reserve", &["park"]));
        let second = place_to_trail(place("Bukit Timah Nature Reserve", &["park"]));

        assert_eq!(first.stats.distance, second.stats.distance);
        assert_eq!(first.stats.elevation_gain, second.stats.elevation_gain);
        assert_eq!(first.stats.estimated_time, second.stats.estimated_time);
        assert_eq!(first.facilities.toilets, second.facilities.toilets);
    }

    #[test]
    fn test_place_to_trail_fields() {
        let trail = place_to_trail(place("Bukit Timah Nature Reserve", &["park"]));

        assert_eq!(trail.id, "place-ChIJd7zN_thz");
        assert_eq!(trail.rating, 4.7);
        assert_eq!(trail.review_count, 2876);
        assert_eq!(trail.location.country, "Singapore");
        assert_eq!(trail.path.len(), 3);
        assert!((3.0..=15.0).contains(&trail.stats.distance));
        assert!((50.0..=550.0).contains(&trail.stats.elevation_gain));
        assert!((60..=240).contains(&trail.stats.estimated_time));
        assert!(trail.facilities.parking);
    }

    #[test]
    fn test_trail_id_handles_short_and_multibyte_place_ids() {
        let mut short = place("Tiny Park", &["park"]);
        short.place_id = "abc".to_string();
        assert_eq!(place_to_trail(short).id, "place-abc");

        // Provider ids are ASCII in practice, but the id derivation must
        // not split a multi-byte character
        let mut multibyte = place("Grüner Wald", &["park"]);
        multibyte.place_id = "grüner-wald-trail".to_string();
        assert_eq!(place_to_trail(multibyte).id, "place-grüner-wald-");
    }

    #[test]
    fn test_photo_urls_pad_with_query_lookups() {
        let p = place("Bukit Timah Nature Reserve", &["park"]);
        let urls = photo_urls(&p);
        assert_eq!(urls.len(), PHOTOS_PER_TRAIL);
        assert!(urls.iter().all(|u| u.starts_with("/api/place-photo?query=")));

        let mut with_photos = p.clone();
        with_photos.photos = Some(vec![PlacePhoto {
            photo_reference: "ref-a".to_string(),
            height: 1080,
            width: 1920,
        }]);
        let urls = photo_urls(&with_photos);
        assert_eq!(urls.len(), PHOTOS_PER_TRAIL);
        assert!(urls[0].starts_with("/api/place-photo?photoRef=ref-a"));
        assert!(urls[1].starts_with("/api/place-photo?query="));
    }
}
