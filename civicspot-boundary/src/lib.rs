use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A reported issue as exchanged with clients and record stores.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: IssueCategory,
    #[serde(default)]
    pub status: IssueStatus,
    pub location: IssueLocation,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub reporter_id: String,
    #[serde(default)]
    pub reporter_name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct IssueLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    RoadDamage,
    Sanitation,
    Lighting,
    Graffiti,
    Sidewalk,
    Vegetation,
    Other,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Open,
    #[serde(alias = "in-progress")]
    InProgress,
    Resolved,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NearbyIssue {
    #[serde(flatten)]
    pub issue: Issue,
    /// `null` if the location of the user is unavailable.
    pub distance_km: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct NearbyIssues {
    /// The location the distances are measured from.
    pub origin: Option<Coordinate>,
    pub results: Vec<NearbyIssue>,
    pub degraded: bool,
}
