use super::{filter_issues, prelude::*, IssueFilter};

/// Issues matching the filter near the origin of the query, nearest first.
pub fn nearby_issues<'a>(
    issues: impl IntoIterator<Item = &'a Issue>,
    filter: IssueFilter,
    query: &ProximityQuery,
) -> Result<NearbyRecords<'a, Issue>, ValidationError> {
    let nearby = filter_by_radius(query, filter_issues(issues, filter))?;
    if nearby.is_location_unavailable() {
        log::info!(
            "Location unavailable: showing {} issue(s) without distance",
            nearby.len()
        );
    } else {
        log::info!(
            "Found {} issue(s) within {} of the current location",
            nearby.len(),
            query.radius
        );
    }
    Ok(nearby)
}
