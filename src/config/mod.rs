use crate::core::constants::{
    DEFAULT_DAY_THRESHOLD_HOUR, DEFAULT_FIRST_REMINDER_HOURS, DEFAULT_RETENTION_DAYS,
    DEFAULT_SECOND_REMINDER_HOURS,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_day_threshold_hour")]
    pub day_threshold_hour: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_first_reminder_hours")]
    pub first_reminder_hours: i64,
    #[serde(default = "default_second_reminder_hours")]
    pub second_reminder_hours: i64,
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
}

fn default_day_threshold_hour() -> u32 {
    DEFAULT_DAY_THRESHOLD_HOUR
}
fn default_theme() -> String {
    "dark".to_string()
}
fn default_first_reminder_hours() -> i64 {
    DEFAULT_FIRST_REMINDER_HOURS
}
fn default_second_reminder_hours() -> i64 {
    DEFAULT_SECOND_REMINDER_HOURS
}
fn default_retention_days() -> i64 {
    DEFAULT_RETENTION_DAYS
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            day_threshold_hour: default_day_threshold_hour(),
            theme: default_theme(),
            first_reminder_hours: default_first_reminder_hours(),
            second_reminder_hours: default_second_reminder_hours(),
            retention_days: default_retention_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("carbtracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".carbtracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("carbtracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("carbtracker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Day threshold hour clamped into the valid range.
    pub fn day_threshold_hour(&self) -> u32 {
        self.day_threshold_hour.min(23)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Failed to serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
