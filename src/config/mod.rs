use crate::errors::{AppError, AppResult};
use crate::models::view::View;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".rbooking";
const CONFIG_FILE_NAME: &str = "rbooking.conf";
const DB_FILE_NAME: &str = "rbooking.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_view")]
    pub default_view: String,
    #[serde(default)]
    pub show_old_bookings: bool,
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_view() -> String {
    View::Calendar.as_str().to_string()
}
fn default_week_start() -> String {
    "sunday".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_view: default_view(),
            show_old_bookings: false,
            week_start: default_week_start(),
        }
    }
}

impl Config {
    /// `~/.rbooking` (or `./.rbooking` when no home directory is known).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE_NAME)
    }

    /// Load the configuration file, or defaults when none exists yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// View used when none (or an unknown one) is requested.
    pub fn default_view(&self) -> View {
        View::parse_or_default(&self.default_view)
    }

    /// First weekday of the calendar grid. Unknown values mean Sunday.
    pub fn week_start(&self) -> Weekday {
        match self.week_start.trim().to_lowercase().as_str() {
            "monday" | "mon" => Weekday::Mon,
            _ => Weekday::Sun,
        }
    }

    /// Create the config directory, the config file and an empty database
    /// file. Returns the resolved database path.
    ///
    /// In test mode the config file is left untouched so a developer's real
    /// configuration is never overwritten.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // `--db` is used verbatim by every other command, so it is not
        // re-rooted under the config directory here either.
        let db_path = match custom_db {
            Some(name) => PathBuf::from(name),
            None => dir.join(DB_FILE_NAME),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
