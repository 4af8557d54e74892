use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("civicspot.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub proximity: Option<Proximity>,
    pub geofence: Option<Geofence>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Proximity {
    pub default_radius_km: f64,
    pub radius_options_km: Option<Vec<f64>>,
}

impl Default for Proximity {
    fn default() -> Self {
        Config::default()
            .proximity
            .expect("Proximity configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geofence {
    pub enabled: bool,
    pub name: String,
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Default for Geofence {
    fn default() -> Self {
        Config::default().geofence.expect("Geofence configuration")
    }
}
