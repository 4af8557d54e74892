use crate::{adapters, config::Config, store};
use anyhow::{bail, Result};
use civicspot_boundary as json;
use civicspot_core::{
    proximity::{distance_km, ProximityQuery},
    usecases::{acquire_user_location, nearby_issues, IssueFilter},
    LocationGateway,
};
use civicspot_entities::{
    geo::{Distance, GeoPoint},
    issue::{Issue, IssueCategory, IssueStatus},
    location::{LocationError, UserLocation},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find civic issues near a location")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Great-circle distance between two points in kilometers
    Distance {
        #[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
        from: GeoPoint,
        #[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
        to: GeoPoint,
    },
    /// List the issues near a location, nearest first
    Nearby {
        /// JSON file with an array of issues
        #[arg(long, value_name = "FILE")]
        issues: PathBuf,
        /// Current location; without it all matching issues are listed
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        origin: Option<GeoPoint>,
        /// Search radius in km [default: from configuration]
        #[arg(long, value_name = "KM")]
        radius: Option<f64>,
        #[arg(long)]
        category: Option<IssueCategory>,
        #[arg(long)]
        status: Option<IssueStatus>,
    },
}

/// Position entered on the command line.
struct CommandLinePosition(GeoPoint);

impl LocationGateway for CommandLinePosition {
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Distance { from, to } => {
            let km = distance_km(from, to)?;
            println!("{km:.3} km");
        }
        Command::Nearby {
            issues,
            origin,
            radius,
            category,
            status,
        } => {
            let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
            let issues = store::load_issues_from_file(&issues)?;
            let filter = IssueFilter { category, status };
            let json = find_nearby_issues(&cfg, &issues, origin, radius, filter)?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn find_nearby_issues(
    cfg: &Config,
    issues: &[Issue],
    origin: Option<GeoPoint>,
    radius_km: Option<f64>,
    filter: IssueFilter,
) -> Result<json::NearbyIssues> {
    let radius = match radius_km {
        Some(km) => {
            let radius = Distance::from_km(km);
            if !cfg.proximity.is_radius_option(radius) {
                let options = cfg
                    .proximity
                    .radius_options
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                bail!("Unsupported radius {km} km, choose one of: {options}");
            }
            radius
        }
        None => cfg.proximity.default_radius,
    };
    let user_location = match origin {
        Some(pos) => acquire_user_location(&CommandLinePosition(pos), cfg.geofence.as_ref()),
        None => UserLocation::Unknown,
    };
    if let Some(err) = user_location.error() {
        log::warn!("{err}");
    }
    let query = ProximityQuery::new(user_location.pos(), radius);
    let nearby = nearby_issues(issues, filter, &query)?;
    Ok(adapters::nearby_issues_to_json(query.origin, nearby))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_nearby_args() {
        let args = Args::try_parse_from([
            "civicspot",
            "nearby",
            "--issues",
            "issues.json",
            "--origin",
            "-33.8688,151.2093",
            "--category",
            "road_damage",
            "--status",
            "in-progress",
        ])
        .unwrap();
        let Command::Nearby {
            origin,
            radius,
            category,
            status,
            ..
        } = args.command
        else {
            panic!("nearby command expected");
        };
        assert_eq!(
            Some(GeoPoint::from_lat_lng_deg(-33.8688, 151.2093)),
            origin
        );
        assert_eq!(None, radius);
        assert_eq!(Some(IssueCategory::RoadDamage), category);
        assert_eq!(Some(IssueStatus::InProgress), status);
    }

    #[test]
    fn reject_invalid_origin() {
        assert!(Args::try_parse_from(["civicspot", "distance", "91,0", "0,0"]).is_err());
        assert!(Args::try_parse_from(["civicspot", "distance", "0;0", "0,0"]).is_err());
        assert!(Args::try_parse_from(["civicspot", "distance", "0,0", "0,-180"]).is_ok());
    }

    fn default_config() -> Config {
        let file: Option<&Path> = None;
        Config::try_load_from_file_or_default(file).unwrap()
    }

    fn demo_issues() -> Vec<Issue> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/issues.json");
        store::load_issues_from_file(&path).unwrap()
    }

    fn ids(nearby: &json::NearbyIssues) -> Vec<&str> {
        nearby
            .results
            .iter()
            .map(|nearby| nearby.issue.id.as_str())
            .collect()
    }

    const DELHI: (f64, f64) = (28.6139, 77.2090);

    #[test]
    fn demo_issues_near_delhi() {
        let cfg = default_config();
        let issues = demo_issues();
        let origin = GeoPoint::from_lat_lng_deg(DELHI.0, DELHI.1);
        let nearby =
            find_nearby_issues(&cfg, &issues, Some(origin), None, IssueFilter::default())
                .unwrap();
        assert!(!nearby.degraded);
        assert!(nearby.origin.is_some());
        assert_eq!(vec!["3", "2", "1"], ids(&nearby));

        let nearby = find_nearby_issues(
            &cfg,
            &issues,
            Some(origin),
            Some(10.0),
            IssueFilter::default(),
        )
        .unwrap();
        assert_eq!(vec!["3", "2", "1", "4", "5"], ids(&nearby));

        let filter = IssueFilter {
            status: Some(IssueStatus::InProgress),
            ..Default::default()
        };
        let nearby = find_nearby_issues(&cfg, &issues, Some(origin), None, filter).unwrap();
        assert_eq!(vec!["2"], ids(&nearby));
    }

    #[test]
    fn origin_outside_of_geofence_lists_all_issues() {
        let cfg = default_config();
        let issues = demo_issues();
        let new_york = GeoPoint::from_lat_lng_deg(40.712776, -74.005974);
        let nearby =
            find_nearby_issues(&cfg, &issues, Some(new_york), None, IssueFilter::default())
                .unwrap();
        assert!(nearby.degraded);
        assert!(nearby.origin.is_none());
        assert_eq!(vec!["1", "2", "3", "4", "5", "6"], ids(&nearby));
    }

    #[test]
    fn reject_radius_that_is_not_an_option() {
        let cfg = default_config();
        let issues = demo_issues();
        let origin = GeoPoint::from_lat_lng_deg(DELHI.0, DELHI.1);
        assert!(
            find_nearby_issues(&cfg, &issues, Some(origin), Some(2.5), IssueFilter::default())
                .is_err()
        );
    }
}
