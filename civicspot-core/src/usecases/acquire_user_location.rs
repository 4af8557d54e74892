use super::prelude::*;

/// Ask the gateway for the current position and apply the geofence.
///
/// Failures are not errors of the application but a state that
/// is shown to the user, so they end up in [`UserLocation::Failed`].
pub fn acquire_user_location<G>(gateway: &G, geofence: Option<&Geofence>) -> UserLocation
where
    G: LocationGateway + ?Sized,
{
    let pos = match gateway.current_position() {
        Ok(pos) => pos,
        Err(err) => {
            log::warn!("Unable to acquire location: {err}");
            return UserLocation::Failed(err);
        }
    };
    if let Err(err) = pos.validate() {
        log::warn!("Location gateway reported an invalid position: {err}");
        return UserLocation::Failed(LocationError::PositionUnavailable);
    }
    if let Some(geofence) = geofence {
        if !geofence.contains(pos) {
            log::info!("Location {pos} is outside of {}", geofence.name);
            return UserLocation::Failed(LocationError::OutsideServiceArea {
                area: geofence.name.clone(),
            });
        }
    }
    log::debug!("Acquired location {pos}");
    UserLocation::Acquired(pos)
}
