//! Distance computation and radius filtering of geo-tagged records.
//!
//! Every call takes the origin and the radius as point-in-time values.
//! Nothing is cached between calls; callers that repeatedly query large
//! record sets are responsible for memoizing the results themselves.

use civicspot_entities::{
    geo::{CoordinateInvalidation, Distance, GeoPoint},
    issue::Issue,
};
use thiserror::Error;

/// An entity that carries a position on the map.
pub trait LocatedRecord {
    /// Opaque identifier, only used for reporting invalid records.
    fn record_id(&self) -> &str;

    fn pos(&self) -> GeoPoint;
}

impl LocatedRecord for Issue {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn pos(&self) -> GeoPoint {
        self.location.pos
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid origin: {0}")]
    Origin(CoordinateInvalidation),
    #[error("Invalid target: {0}")]
    Target(CoordinateInvalidation),
    #[error("Invalid position of record '{id}' (index {index}): {cause}")]
    Record {
        index: usize,
        id: String,
        cause: CoordinateInvalidation,
    },
    #[error("Invalid radius: {0} km")]
    Radius(f64),
}

/// Great-circle distance between two points in kilometers.
///
/// Invalid coordinates are rejected instead of being
/// turned into a (short) distance.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> Result<f64, ValidationError> {
    a.validate().map_err(ValidationError::Origin)?;
    b.validate().map_err(ValidationError::Target)?;
    Ok(distance_between(a, b).to_km())
}

fn distance_between(origin: GeoPoint, pos: GeoPoint) -> Distance {
    debug_assert!(origin.is_valid());
    debug_assert!(pos.is_valid());
    origin.distance_to(pos)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityQuery {
    /// `None` while the location of the user is unknown.
    pub origin: Option<GeoPoint>,
    pub radius: Distance,
}

impl ProximityQuery {
    pub const fn new(origin: Option<GeoPoint>, radius: Distance) -> Self {
        Self { origin, radius }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let radius_km = self.radius.to_km();
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(ValidationError::Radius(radius_km));
        }
        if let Some(origin) = self.origin {
            origin.validate().map_err(ValidationError::Origin)?;
        }
        Ok(())
    }

    /// Distance between the origin and the record, `None` without an origin.
    pub fn distance_from_origin<T>(&self, record: &T) -> Result<Option<Distance>, ValidationError>
    where
        T: LocatedRecord + ?Sized,
    {
        let Some(origin) = self.origin else {
            return Ok(None);
        };
        origin.validate().map_err(ValidationError::Origin)?;
        let pos = record.pos();
        pos.validate().map_err(ValidationError::Target)?;
        Ok(Some(distance_between(origin, pos)))
    }

    /// The radius is inclusive. Without an origin no record is within the radius.
    pub fn is_within_radius<T>(&self, record: &T) -> Result<bool, ValidationError>
    where
        T: LocatedRecord + ?Sized,
    {
        self.validate()?;
        Ok(self
            .distance_from_origin(record)?
            .is_some_and(|distance| distance <= self.radius))
    }
}

#[derive(Debug)]
pub struct Nearby<'a, T> {
    pub record: &'a T,
    /// `None` if the location of the user is unavailable.
    pub distance: Option<Distance>,
}

#[derive(Debug)]
pub struct NearbyRecords<'a, T> {
    pub results: Vec<Nearby<'a, T>>,
    /// Set if the results are neither filtered nor ordered,
    /// because the location of the user is unavailable.
    pub degraded: bool,
}

impl<'a, T> NearbyRecords<'a, T> {
    pub fn is_location_unavailable(&self) -> bool {
        self.degraded
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.results.iter().map(|nearby| nearby.record)
    }
}

/// Select all records within the radius of the query, nearest first.
///
/// Records with equal distance keep their relative input order.
/// Without an origin all records are returned unfiltered, in input
/// order and without a distance, flagged as `degraded`.
pub fn filter_by_radius<'a, T, I>(
    query: &ProximityQuery,
    records: I,
) -> Result<NearbyRecords<'a, T>, ValidationError>
where
    T: LocatedRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    query.validate()?;
    let Some(origin) = query.origin else {
        let results: Vec<_> = records
            .into_iter()
            .map(|record| Nearby {
                record,
                distance: None,
            })
            .collect();
        log::debug!(
            "Location unavailable: returning {} unfiltered record(s)",
            results.len()
        );
        return Ok(NearbyRecords {
            results,
            degraded: true,
        });
    };

    let mut candidate_count = 0;
    let mut ranked = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        candidate_count += 1;
        let pos = record.pos();
        pos.validate()
            .map_err(|cause| ValidationError::Record {
                index,
                id: record.record_id().to_owned(),
                cause,
            })?;
        let distance = distance_between(origin, pos);
        if distance <= query.radius {
            ranked.push((record, distance));
        }
    }
    // `sort_by` is stable
    ranked.sort_by(|(_, lhs), (_, rhs)| lhs.to_km().total_cmp(&rhs.to_km()));
    log::debug!(
        "{} of {} record(s) within {} around {}",
        ranked.len(),
        candidate_count,
        query.radius,
        origin
    );

    let results = ranked
        .into_iter()
        .map(|(record, distance)| Nearby {
            record,
            distance: Some(distance),
        })
        .collect();
    Ok(NearbyRecords {
        results,
        degraded: false,
    })
}
