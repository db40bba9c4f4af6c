//! Validation utilities for the Trail Finder platform

use crate::types::Coordinates;

/// Validate a latitude value
pub fn validate_latitude(lat: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude value
pub fn validate_longitude(lng: f64) -> Result<(), &'static str> {
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a coordinate pair
pub fn validate_coordinates(coordinates: &Coordinates) -> Result<(), &'static str> {
    validate_latitude(coordinates.lat)?;
    validate_longitude(coordinates.lng)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let coords = [
            Coordinates::new(1.3521, 103.8198), // Singapore
            Coordinates::new(-90.0, -180.0),
            Coordinates::new(90.0, 180.0),
            Coordinates::new(0.0, 0.0),
        ];
        for c in coords {
            assert!(validate_coordinates(&c).is_ok());
        }
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-91.0).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(validate_longitude(180.5).is_err());
        assert!(validate_longitude(-200.0).is_err());
        assert!(validate_longitude(f64::INFINITY).is_err());
    }
}
