use civicspot_boundary as json;
use civicspot_core::proximity::NearbyRecords;
use civicspot_entities::{geo::GeoPoint, issue::Issue};

pub fn nearby_issues_to_json(
    origin: Option<GeoPoint>,
    nearby: NearbyRecords<'_, Issue>,
) -> json::NearbyIssues {
    let NearbyRecords { results, degraded } = nearby;
    let results = results
        .into_iter()
        .map(|nearby| json::NearbyIssue {
            issue: nearby.record.clone().into(),
            distance_km: nearby.distance.map(|d| d.to_km()),
        })
        .collect();
    json::NearbyIssues {
        origin: origin.map(Into::into),
        results,
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicspot_core::proximity::{filter_by_radius, ProximityQuery};
    use civicspot_entities::{builders::*, geo::*};

    fn issues() -> Vec<Issue> {
        vec![
            Issue::build()
                .id("far")
                .pos(GeoPoint::from_lat_lng_deg(40.714776, -74.003974))
                .finish(),
            Issue::build()
                .id("near")
                .pos(GeoPoint::from_lat_lng_deg(40.712776, -74.005974))
                .finish(),
        ]
    }

    #[test]
    fn nearby_issues_with_distance() {
        let issues = issues();
        let origin = GeoPoint::from_lat_lng_deg(40.712776, -74.005974);
        let query = ProximityQuery::new(Some(origin), Distance::from_km(1.0));
        let nearby = nearby_issues_to_json(
            query.origin,
            filter_by_radius(&query, &issues).unwrap(),
        );
        assert!(!nearby.degraded);
        let json::Coordinate { lat, lng } = nearby.origin.unwrap();
        assert_eq!((40.712776, -74.005974), (lat, lng));
        assert_eq!("near", nearby.results[0].issue.id);
        assert_eq!(Some(0.0), nearby.results[0].distance_km);
        assert_eq!("far", nearby.results[1].issue.id);
        let km = nearby.results[1].distance_km.unwrap();
        assert!((km - 0.2791).abs() < 0.001, "{km}");
    }

    #[test]
    fn nearby_issues_without_location() {
        let issues = issues();
        let query = ProximityQuery::new(None, Distance::from_km(1.0));
        let nearby = nearby_issues_to_json(
            query.origin,
            filter_by_radius(&query, &issues).unwrap(),
        );
        assert!(nearby.degraded);
        assert!(nearby.origin.is_none());
        assert_eq!(2, nearby.results.len());
        assert!(nearby.results.iter().all(|r| r.distance_km.is_none()));
        assert_eq!("far", nearby.results[0].issue.id);
    }
}
