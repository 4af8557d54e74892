use crate::geo::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub pos: GeoPoint,
    pub address: Option<String>,
}

/// Reasons why the position of a user could not be determined.
///
/// The messages are meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location access denied. Please enable location services to see issues near you.")]
    PermissionDenied,
    #[error("Location unavailable. Please check your GPS settings.")]
    PositionUnavailable,
    #[error("Location request timed out. Please try again.")]
    Timeout,
    /// No location service, e.g. a device without GPS.
    #[error("Location service unavailable. Please try again later.")]
    Unsupported,
    #[error("Unable to get your location. Please check your device settings.")]
    Other,
    #[error("Location detected outside {area}. Please ensure you're in {area} to use this service.")]
    OutsideServiceArea { area: String },
}

/// The position of the user as known to the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserLocation {
    /// Not acquired (yet).
    #[default]
    Unknown,
    Acquired(GeoPoint),
    Failed(LocationError),
}

impl UserLocation {
    pub fn pos(&self) -> Option<GeoPoint> {
        match self {
            Self::Acquired(pos) => Some(*pos),
            Self::Unknown | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LocationError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Unknown | Self::Acquired(_) => None,
        }
    }
}
