use itertools::Itertools;
use std::{fmt, num::ParseFloatError, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateInvalidation {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
}

/// Latitude in degrees.
///
/// The raw value is stored as is, so coordinates read from external
/// record stores may be invalid. Use [`LatCoord::is_valid`]
/// before relying on it.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        Self(deg.into())
    }
}

impl Default for LatCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Longitude in degrees.
///
/// Both -180 and 180 are valid and denote the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        Self(deg.into())
    }
}

impl Default for LngCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on the surface of the earth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl GeoPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    /// Reports the first invalid coordinate, latitude before longitude.
    pub fn validate(self) -> Result<(), CoordinateInvalidation> {
        if !self.lat.is_valid() {
            return Err(CoordinateInvalidation::Latitude(self.lat.to_deg()));
        }
        if !self.lng.is_valid() {
            return Err(CoordinateInvalidation::Longitude(self.lng.to_deg()));
        }
        Ok(())
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    /// Unchecked construction, e.g. for records loaded from a store.
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordinateInvalidation> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.validate()?;
        Ok(pos)
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseGeoPointError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|source| ParseGeoPointError::Latitude {
                input: lat_deg_str.to_owned(),
                source,
            })?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|source| ParseGeoPointError::Longitude {
                input: lng_deg_str.to_owned(),
                source,
            })?;
        Ok(Self::try_from_lat_lng_deg(lat_deg, lng_deg)?)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum ParseGeoPointError {
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude '{input}': {source}")]
    Latitude {
        input: String,
        source: ParseFloatError,
    },
    #[error("Invalid longitude '{input}': {source}")]
    Longitude {
        input: String,
        source: ParseFloatError,
    },
    #[error(transparent)]
    Coordinate(#[from] CoordinateInvalidation),
}

impl FromStr for GeoPoint {
    type Err = ParseGeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            GeoPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(ParseGeoPointError::Format(s.to_owned()))
        }
    }
}

/// A distance on the surface of the earth in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_km(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.3} km", self.0)
    }
}

pub const MEAN_EARTH_RADIUS: Distance = Distance::from_km(6_371.0);

impl GeoPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    ///
    /// The coordinates are not checked. Reject invalid points
    /// with [`GeoPoint::validate`] beforehand.
    ///
    /// The `atan2` form of the central angle keeps its precision for
    /// antipodal points where `asin` would approach the edge of its domain.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance_to(self, other: GeoPoint) -> Distance {
        let (lat1_rad, lng1_rad) = self.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = other.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding may push `a` slightly out of [0, 1] near the antipode
        let a = a.clamp(0.0, 1.0);
        let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_km(MEAN_EARTH_RADIUS.to_km() * central_angle)
    }
}

/// A bounding box given by its south-west and north-east corners.
///
/// If the south-west longitude is greater than the north-east
/// longitude the box crosses the antimeridian.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: GeoPoint,
    ne: GeoPoint,
}

impl MapBbox {
    pub const fn new(sw: GeoPoint, ne: GeoPoint) -> Self {
        Self { sw, ne }
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    /// All edges are inclusive.
    pub fn contains_point(&self, pt: GeoPoint) -> bool {
        debug_assert!(self.is_valid());
        if !pt.is_valid() {
            return false;
        }
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
