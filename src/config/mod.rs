use crate::errors::{AppError, AppResult};
use crate::models::role::RoleFilter;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Years offered by the calendar year selector.
pub const DEFAULT_YEARS: [i32; 6] = [2025, 2026, 2027, 2028, 2029, 2030];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default = "default_years")]
    pub years: Vec<i32>,
    #[serde(default)]
    pub default_role: RoleFilter,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_cache_file() -> String {
    Config::config_dir()
        .join("cache.json")
        .to_string_lossy()
        .to_string()
}
fn default_report_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}
fn default_images_dir() -> String {
    Config::config_dir()
        .join("images")
        .to_string_lossy()
        .to_string()
}
fn default_years() -> Vec<i32> {
    DEFAULT_YEARS.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            cache_file: default_cache_file(),
            report_dir: default_report_dir(),
            images_dir: default_images_dir(),
            years: default_years(),
            default_role: RoleFilter::All,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Return the full path of the SQLite document store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcheckin.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })?;

        cfg.expand_paths();
        cfg.validate()?;
        Ok(cfg)
    }

    fn expand_paths(&mut self) {
        for p in [
            &mut self.database,
            &mut self.cache_file,
            &mut self.report_dir,
            &mut self.images_dir,
        ] {
            *p = expand_tilde(p).to_string_lossy().to_string();
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.years.is_empty() {
            return Err(AppError::Config("`years` must list at least one year".into()));
        }
        Ok(())
    }

    /// Initialize configuration directory, configuration file and database file.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
