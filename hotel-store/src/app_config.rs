use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub hotel: HotelConfig,
    pub storage: StorageConfig,
    pub booking: BookingRules,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HotelConfig {
    pub name: String,
    pub currency_symbol: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: "Grand Azure Hotel".to_string(),
            currency_symbol: "P".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: PathBuf,
    pub report_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("reservations.json"),
            report_file: PathBuf::from("bookings_report.txt"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BookingRules {
    pub id_prefix: String,
    pub id_base: u64,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            id_prefix: "BK".to_string(),
            id_base: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            // Every layer is optional; built-in defaults fill the gaps
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Local overrides, not checked in
            .add_source(file("local"))
            // Eg.. `HOTEL__STORAGE__DATA_FILE=/tmp/r.json`
            .add_source(config::Environment::with_prefix("HOTEL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
