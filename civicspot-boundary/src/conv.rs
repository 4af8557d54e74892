use super::*;
use civicspot_entities as e;

impl From<e::issue::IssueCategory> for IssueCategory {
    fn from(from: e::issue::IssueCategory) -> Self {
        use e::issue::IssueCategory as C;
        match from {
            C::RoadDamage => Self::RoadDamage,
            C::Sanitation => Self::Sanitation,
            C::Lighting => Self::Lighting,
            C::Graffiti => Self::Graffiti,
            C::Sidewalk => Self::Sidewalk,
            C::Vegetation => Self::Vegetation,
            C::Other => Self::Other,
        }
    }
}

impl From<IssueCategory> for e::issue::IssueCategory {
    fn from(from: IssueCategory) -> Self {
        use IssueCategory as C;
        match from {
            C::RoadDamage => Self::RoadDamage,
            C::Sanitation => Self::Sanitation,
            C::Lighting => Self::Lighting,
            C::Graffiti => Self::Graffiti,
            C::Sidewalk => Self::Sidewalk,
            C::Vegetation => Self::Vegetation,
            C::Other => Self::Other,
        }
    }
}

impl From<e::issue::IssueStatus> for IssueStatus {
    fn from(from: e::issue::IssueStatus) -> Self {
        use e::issue::IssueStatus::*;
        match from {
            Open => IssueStatus::Open,
            InProgress => IssueStatus::InProgress,
            Resolved => IssueStatus::Resolved,
        }
    }
}

impl From<IssueStatus> for e::issue::IssueStatus {
    fn from(from: IssueStatus) -> Self {
        use e::issue::IssueStatus::*;
        match from {
            IssueStatus::Open => Open,
            IssueStatus::InProgress => InProgress,
            IssueStatus::Resolved => Resolved,
        }
    }
}

impl From<e::geo::GeoPoint> for Coordinate {
    fn from(from: e::geo::GeoPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::location::Location> for IssueLocation {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location { pos, address } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            latitude,
            longitude,
            address,
        }
    }
}

// Unchecked: the coordinates are validated on use.
impl From<IssueLocation> for e::location::Location {
    fn from(from: IssueLocation) -> Self {
        let IssueLocation {
            latitude,
            longitude,
            address,
        } = from;
        Self {
            pos: e::geo::GeoPoint::from_lat_lng_deg(latitude, longitude),
            address,
        }
    }
}

impl From<e::issue::Issue> for Issue {
    fn from(from: e::issue::Issue) -> Self {
        let e::issue::Issue {
            id,
            title,
            description,
            category,
            status,
            location,
            photos,
            reporter_id,
            reporter_name,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            category: category.into(),
            status: status.into(),
            location: location.into(),
            photos,
            reporter_id: reporter_id.into(),
            reporter_name,
        }
    }
}

impl From<Issue> for e::issue::Issue {
    fn from(from: Issue) -> Self {
        let Issue {
            id,
            title,
            description,
            category,
            status,
            location,
            photos,
            reporter_id,
            reporter_name,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            category: category.into(),
            status: status.into(),
            location: location.into(),
            photos,
            reporter_id: reporter_id.into(),
            reporter_name,
        }
    }
}
