mod acquire_user_location;
mod filter_issues;
mod nearby_issues;

pub use self::{acquire_user_location::*, filter_issues::*, nearby_issues::*};

mod prelude {
    pub use crate::{geofence::*, proximity::*, LocationGateway};
    pub use civicspot_entities::{issue::*, location::*};
}
