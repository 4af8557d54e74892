use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{id::*, location::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IssueCategory {
    RoadDamage,
    Sanitation,
    Lighting,
    Graffiti,
    Sidewalk,
    Vegetation,
    Other,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IssueStatus {
    #[default]
    Open,
    // The backend spells it with a hyphen
    #[strum(to_string = "in_progress", serialize = "in-progress")]
    InProgress,
    Resolved,
}

/// A civic issue reported by a citizen.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub status: IssueStatus,
    pub location: Location,
    pub photos: Vec<String>,
    pub reporter_id: Id,
    pub reporter_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_string_representation() {
        assert_eq!("road_damage", IssueCategory::RoadDamage.as_ref());
        assert_eq!(Ok(IssueCategory::RoadDamage), "road_damage".parse());
        assert_eq!(Ok(IssueCategory::Lighting), "Lighting".parse());
        assert!("pothole".parse::<IssueCategory>().is_err());
        for category in IssueCategory::iter() {
            assert_eq!(Ok(category), category.to_string().parse());
        }
        assert_eq!(7, IssueCategory::COUNT);
    }

    #[test]
    fn status_accepts_both_spellings() {
        assert_eq!("in_progress", IssueStatus::InProgress.to_string());
        assert_eq!(Ok(IssueStatus::InProgress), "in_progress".parse());
        assert_eq!(Ok(IssueStatus::InProgress), "in-progress".parse());
        assert_eq!(IssueStatus::Open, IssueStatus::default());
        assert_eq!(3, IssueStatus::iter().count());
    }
}
