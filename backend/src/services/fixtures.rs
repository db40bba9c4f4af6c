//! Built-in trail fixtures
//!
//! Served when no places API key is configured, so the application remains
//! fully browsable in development. The dataset covers well-known Singapore
//! trails; photo URLs go through the query-based image proxy.

use shared::{
    Coordinates, Difficulty, Trail, TrailFacilities, TrailLocation, TrailStats, TrailType,
};

/// Return the fixture trails, filtered by the query when one is given.
///
/// The filter matches name, city and description, case-insensitively.
pub fn sample_trails(query: Option<&str>) -> Vec<Trail> {
    let trails = all_trails();

    match query.map(|q| q.trim().to_lowercase()).filter(|q| !q.is_empty()) {
        Some(q) => trails
            .into_iter()
            .filter(|trail| {
                trail.name.to_lowercase().contains(&q)
                    || trail.location.city.to_lowercase().contains(&q)
                    || trail.description.to_lowercase().contains(&q)
            })
            .collect(),
        None => trails,
    }
}

fn photo_url(query: &str, cache_key: &str) -> String {
    format!(
        "/api/place-photo?query={}&cacheKey={}",
        urlencoding::encode(query),
        cache_key
    )
}

#[allow(clippy::too_many_arguments)]
fn trail(
    id: &str,
    name: &str,
    description: &str,
    city: &str,
    coordinates: Coordinates,
    stats: TrailStats,
    facilities: TrailFacilities,
    safety_notes: &[&str],
    path: Vec<Coordinates>,
    rating: f64,
    review_count: i64,
) -> Trail {
    Trail {
        id: id.to_string(),
        place_id: None,
        name: name.to_string(),
        description: description.to_string(),
        location: TrailLocation {
            city: city.to_string(),
            state: "Singapore".to_string(),
            country: "Singapore".to_string(),
            coordinates,
        },
        stats,
        facilities,
        safety_notes: safety_notes.iter().map(|n| n.to_string()).collect(),
        path,
        images: vec![
            photo_url(&format!("{} Singapore", name), &format!("trail-{}-0", id)),
            photo_url(&format!("{} nature", name), &format!("trail-{}-1", id)),
        ],
        rating,
        review_count,
    }
}

fn all_trails() -> Vec<Trail> {
    vec![
        trail(
            "1",
            "MacRitchie TreeTop Walk",
            "Singapore's most popular nature trail featuring the iconic 250-meter free-standing suspension bridge. Walk through the forest canopy and spot wildlife like long-tailed macaques and flying lemurs.",
            "Central Catchment",
            Coordinates::new(1.3542, 103.8198),
            TrailStats {
                distance: 11.0,
                elevation_gain: 80.0,
                estimated_time: 240,
                difficulty: Difficulty::Moderate,
                trail_type: TrailType::Loop,
            },
            TrailFacilities {
                parking: true,
                toilets: true,
                water_points: true,
                campsites: false,
            },
            &[
                "TreeTop Walk opens 9am-5pm (last entry 4:45pm)",
                "Closed on Mondays except public holidays",
                "Bring insect repellent",
                "Do not feed the monkeys",
            ],
            vec![
                Coordinates::new(1.3412, 103.8332),
                Coordinates::new(1.3478, 103.8265),
                Coordinates::new(1.3542, 103.8198),
                Coordinates::new(1.3512, 103.8245),
                Coordinates::new(1.3412, 103.8332),
            ],
            4.8,
            3542,
        ),
        trail(
            "2",
            "Bukit Timah Nature Reserve",
            "Home to Singapore's highest natural point at 163.63m. This primary rainforest is one of the few remaining in the world and hosts rich biodiversity including over 840 flowering plant species.",
            "Bukit Timah",
            Coordinates::new(1.3547, 103.7765),
            TrailStats {
                distance: 3.2,
                elevation_gain: 163.0,
                estimated_time: 90,
                difficulty: Difficulty::Moderate,
                trail_type: TrailType::OutAndBack,
            },
            TrailFacilities {
                parking: true,
                toilets: true,
                water_points: true,
                campsites: false,
            },
            &[
                "Multiple trail routes available - check map",
                "Steep sections on main summit trail",
                "Watch for cyclists on shared paths",
                "Monkeys present - secure your belongings",
            ],
            vec![
                Coordinates::new(1.3502, 103.7756),
                Coordinates::new(1.3525, 103.7762),
                Coordinates::new(1.3547, 103.7765),
            ],
            4.7,
            2876,
        ),
        trail(
            "3",
            "Southern Ridges",
            "A stunning 10km trail connecting Mount Faber Park, Telok Blangah Hill Park, HortPark, Kent Ridge Park, and Labrador Nature Reserve. Features the iconic Henderson Waves bridge.",
            "Southern Singapore",
            Coordinates::new(1.2789, 103.8189),
            TrailStats {
                distance: 10.0,
                elevation_gain: 120.0,
                estimated_time: 210,
                difficulty: Difficulty::Easy,
                trail_type: TrailType::PointToPoint,
            },
            TrailFacilities {
                parking: true,
                toilets: true,
                water_points: true,
                campsites: false,
            },
            &[
                "Multiple entry and exit points",
                "Henderson Waves is stunning at sunset",
                "Some exposed sections - bring sun protection",
            ],
            vec![
                Coordinates::new(1.2713, 103.8190),
                Coordinates::new(1.2764, 103.8167),
                Coordinates::new(1.2789, 103.8189),
                Coordinates::new(1.2832, 103.8021),
            ],
            4.6,
            4231,
        ),
        trail(
            "4",
            "Pulau Ubin Chek Jawa",
            "An offshore island adventure through one of Singapore's last kampongs to the Chek Jawa wetlands, where six ecosystems meet. Take a bumboat from Changi Point Ferry Terminal.",
            "Pulau Ubin",
            Coordinates::new(1.4097, 103.9904),
            TrailStats {
                distance: 8.5,
                elevation_gain: 60.0,
                estimated_time: 180,
                difficulty: Difficulty::Easy,
                trail_type: TrailType::Loop,
            },
            TrailFacilities {
                parking: false,
                toilets: true,
                water_points: false,
                campsites: true,
            },
            &[
                "Check tide times for the boardwalk",
                "Bring cash for the bumboat ride",
                "Limited food options - pack snacks",
            ],
            vec![
                Coordinates::new(1.4013, 103.9630),
                Coordinates::new(1.4065, 103.9782),
                Coordinates::new(1.4097, 103.9904),
            ],
            4.5,
            1687,
        ),
        trail(
            "5",
            "Green Corridor",
            "A 24km heritage trail along the former Malayan railway line. Mostly flat and shaded, it cuts a green ribbon through the heart of the island and can be walked in sections.",
            "Bukit Timah",
            Coordinates::new(1.3321, 103.7867),
            TrailStats {
                distance: 24.0,
                elevation_gain: 40.0,
                estimated_time: 300,
                difficulty: Difficulty::Easy,
                trail_type: TrailType::PointToPoint,
            },
            TrailFacilities {
                parking: false,
                toilets: false,
                water_points: false,
                campsites: false,
            },
            &[
                "Can be muddy after rain",
                "Few facilities along the route - plan ahead",
                "Suitable for all ages",
            ],
            vec![
                Coordinates::new(1.2949, 103.8049),
                Coordinates::new(1.3321, 103.7867),
                Coordinates::new(1.3856, 103.7604),
            ],
            4.4,
            982,
        ),
        trail(
            "6",
            "Fort Canning Park",
            "A historical hilltop park in the city centre with ancient artefacts, colonial landmarks and the famous spiral staircase photo spot. An easy green escape near Dhoby Ghaut.",
            "City Centre",
            Coordinates::new(1.2946, 103.8463),
            TrailStats {
                distance: 2.5,
                elevation_gain: 48.0,
                estimated_time: 60,
                difficulty: Difficulty::Easy,
                trail_type: TrailType::Loop,
            },
            TrailFacilities {
                parking: true,
                toilets: true,
                water_points: true,
                campsites: false,
            },
            &[
                "Popular photo spots get crowded on weekends",
                "Paths are paved but include stairs",
            ],
            vec![
                Coordinates::new(1.2958, 103.8442),
                Coordinates::new(1.2946, 103.8463),
                Coordinates::new(1.2929, 103.8471),
            ],
            4.5,
            5123,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_well_formed() {
        let trails = sample_trails(None);
        assert_eq!(trails.len(), 6);

        for trail in &trails {
            assert!(!trail.name.is_empty());
            assert!(!trail.safety_notes.is_empty());
            assert!(trail.path.len() >= 3);
            assert_eq!(trail.images.len(), 2);
            assert!(trail.rating >= 4.0 && trail.rating <= 5.0);
            assert!(shared::validate_coordinates(&trail.location.coordinates).is_ok());
        }
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let trails = sample_trails(None);
        let mut ids: Vec<_> = trails.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), trails.len());
    }

    #[test]
    fn test_query_filter_matches_name() {
        let trails = sample_trails(Some("macritchie"));
        assert_eq!(trails.len(), 1);
        assert_eq!(trails[0].name, "MacRitchie TreeTop Walk");
    }

    #[test]
    fn test_query_filter_matches_city() {
        let trails = sample_trails(Some("bukit timah"));
        assert!(trails.len() >= 2);
    }

    #[test]
    fn test_query_filter_no_match() {
        assert!(sample_trails(Some("everest")).is_empty());
    }

    #[test]
    fn test_blank_query_returns_all() {
        assert_eq!(sample_trails(Some("  ")).len(), 6);
    }
}
