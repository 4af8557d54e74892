use anyhow::{anyhow, bail, Context as _, Result};
use civicspot_core::geofence::Geofence;
use civicspot_entities::geo::{Distance, GeoPoint, MapBbox};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "civicspot.toml";

const ENV_NAME_RADIUS_KM: &str = "CIVICSPOT_RADIUS_KM";

#[derive(Debug)]
pub struct Config {
    pub proximity: Proximity,
    /// `None` if disabled.
    pub geofence: Option<Geofence>,
}

#[derive(Debug)]
pub struct Proximity {
    pub default_radius: Distance,
    /// The radii a user may choose from.
    pub radius_options: Vec<Distance>,
}

impl Proximity {
    pub fn is_radius_option(&self, radius: Distance) -> bool {
        self.radius_options.contains(&radius)
    }

    fn override_default_radius(&mut self, radius_km: &str) -> Result<()> {
        let radius = parse_radius_km(radius_km)?;
        self.check_default_radius(radius)?;
        log::info!("Default radius: {radius}");
        self.default_radius = radius;
        Ok(())
    }

    fn check_default_radius(&self, radius: Distance) -> Result<()> {
        if !self.is_radius_option(radius) {
            bail!("The default radius {radius} is not one of the radius options");
        }
        Ok(())
    }
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(radius_km) = env::var(ENV_NAME_RADIUS_KM) {
            cfg.proximity
                .override_default_radius(&radius_km)
                .with_context(|| format!("Invalid value of {ENV_NAME_RADIUS_KM}"))?;
        }
        Ok(cfg)
    }
}

fn parse_radius_km(s: &str) -> Result<Distance> {
    let km: f64 = s.trim().parse()?;
    let radius = Distance::from_km(km);
    check_radius(radius)?;
    Ok(radius)
}

fn check_radius(radius: Distance) -> Result<()> {
    let km = radius.to_km();
    if !km.is_finite() || km <= 0.0 {
        bail!("Radius must be a positive number of kilometers: {km}");
    }
    Ok(())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            proximity,
            geofence,
        } = from;

        let raw::Proximity {
            default_radius_km,
            radius_options_km,
        } = proximity.unwrap_or_default();

        let default_radius = Distance::from_km(default_radius_km);
        check_radius(default_radius)?;
        let mut radius_options = radius_options_km
            .unwrap_or_else(|| vec![default_radius_km])
            .into_iter()
            .map(Distance::from_km)
            .collect::<Vec<_>>();
        for radius in &radius_options {
            check_radius(*radius)?;
        }
        radius_options.sort_by(|a, b| a.to_km().total_cmp(&b.to_km()));
        radius_options.dedup();
        let proximity = Proximity {
            default_radius,
            radius_options,
        };
        proximity.check_default_radius(default_radius)?;

        let raw::Geofence {
            enabled,
            name,
            south,
            north,
            west,
            east,
        } = geofence.unwrap_or_default();

        let geofence = if enabled {
            let sw = GeoPoint::try_from_lat_lng_deg(south, west)
                .map_err(|err| anyhow!("Invalid south-west corner of geofence {name}: {err}"))?;
            let ne = GeoPoint::try_from_lat_lng_deg(north, east)
                .map_err(|err| anyhow!("Invalid north-east corner of geofence {name}: {err}"))?;
            let bbox = MapBbox::new(sw, ne);
            if south > north {
                bail!("Invalid geofence {name}: south ({south}) is above north ({north})");
            }
            Some(Geofence::new(name, bbox))
        } else {
            log::info!("Geofence is disabled");
            None
        };

        Ok(Self {
            proximity,
            geofence,
        })
    }
}
