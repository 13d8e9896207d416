use validator::Validate;

use crate::types::venue::Venue;

/// One degree of latitude in meters, also used for longitude.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone, Validate)]
pub struct SearchRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within [-90, 90]"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within [-180, 180]"))]
    pub longitude: f64,

    #[validate(range(min = 1, max = 100_000, message = "Radius must be within [1, 100000] meters"))]
    pub radius_meters: u32,

    pub credentials: Credentials,
}

impl SearchRequest {
    pub fn around(venue: &Venue, radius_meters: u32, credentials: Credentials) -> Self {
        Self {
            latitude: venue.latitude,
            longitude: venue.longitude,
            radius_meters,
            credentials,
        }
    }

    /// The longitude span uses the latitude divisor, so boxes are narrower
    /// east-west than the radius away from the equator.
    pub fn bounding_box(&self) -> BoundingBox {
        let delta = self.radius_meters as f64 / METERS_PER_DEGREE;

        BoundingBox {
            lat_range1: self.latitude - delta,
            lat_range2: self.latitude + delta,
            long_range1: self.longitude - delta,
            long_range2: self.longitude + delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_range1: f64,
    pub lat_range2: f64,
    pub long_range1: f64,
    pub long_range2: f64,
}
