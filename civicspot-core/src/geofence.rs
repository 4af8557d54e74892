use civicspot_entities::geo::*;

/// The area in which the service is offered.
///
/// This is a policy applied when acquiring the location of a user,
/// independent of the proximity filtering of issues.
#[derive(Debug, Clone, PartialEq)]
pub struct Geofence {
    pub name: String,
    pub bbox: MapBbox,
}

impl Geofence {
    pub fn new(name: impl Into<String>, bbox: MapBbox) -> Self {
        let name = name.into();
        debug_assert!(bbox.is_valid());
        Self { name, bbox }
    }

    /// Rough boundaries of India.
    pub fn india() -> Self {
        Self::new(
            "India",
            MapBbox::new(
                GeoPoint::from_lat_lng_deg(6.8, 68.1),
                GeoPoint::from_lat_lng_deg(37.6, 97.4),
            ),
        )
    }

    /// Inclusive on all edges. Invalid positions are never contained.
    pub fn contains(&self, pos: GeoPoint) -> bool {
        self.bbox.contains_point(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn india() {
        let india = Geofence::india();
        assert!(india.contains(GeoPoint::from_lat_lng_deg(28.6139, 77.2090)));
        assert!(india.contains(GeoPoint::from_lat_lng_deg(19.0760, 72.8777)));
        assert!(!india.contains(GeoPoint::from_lat_lng_deg(40.712776, -74.005974)));
        assert!(!india.contains(GeoPoint::from_lat_lng_deg(f64::NAN, 77.0)));
    }

    #[test]
    fn edges_are_inclusive() {
        let india = Geofence::india();
        assert!(india.contains(GeoPoint::from_lat_lng_deg(6.8, 68.1)));
        assert!(india.contains(GeoPoint::from_lat_lng_deg(37.6, 97.4)));
        assert!(india.contains(GeoPoint::from_lat_lng_deg(20.0, 97.4)));
        assert!(!india.contains(GeoPoint::from_lat_lng_deg(6.79, 80.0)));
        assert!(!india.contains(GeoPoint::from_lat_lng_deg(37.61, 80.0)));
        assert!(!india.contains(GeoPoint::from_lat_lng_deg(20.0, 68.09)));
        assert!(!india.contains(GeoPoint::from_lat_lng_deg(20.0, 97.41)));
    }

    #[test]
    fn fence_across_the_antimeridian() {
        let fiji = Geofence::new(
            "Fiji",
            MapBbox::new(
                GeoPoint::from_lat_lng_deg(-21.0, 176.0),
                GeoPoint::from_lat_lng_deg(-12.0, -178.0),
            ),
        );
        assert!(fiji.contains(GeoPoint::from_lat_lng_deg(-17.7, 178.0)));
        assert!(fiji.contains(GeoPoint::from_lat_lng_deg(-16.5, -179.9)));
        assert!(!fiji.contains(GeoPoint::from_lat_lng_deg(-17.0, 170.0)));
    }
}
