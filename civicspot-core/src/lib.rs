use civicspot_entities::{geo::GeoPoint, location::LocationError};

pub mod geofence;
pub mod proximity;
pub mod usecases;

/// Source of the current position of the user,
/// e.g. the GPS of a device or a browser API.
pub trait LocationGateway {
    fn current_position(&self) -> Result<GeoPoint, LocationError>;
}
