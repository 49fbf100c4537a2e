//! Dashboard configuration.
//!
//! Settings are read from an optional TOML file and then overridden by
//! `WEATHERPRO_*` environment variables. The file defaults to
//! `<config dir>/weatherpro/config.toml`.

use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const ENV_PREFIX: &str = "WEATHERPRO";
const CONFIG_DIR_NAME: &str = "weatherpro";

pub const DEFAULT_WEATHER_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";
pub const DEFAULT_AIR_QUALITY_BASE_URL: &str = "https://api.waqi.info/feed";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_CITY: &str = "London";

#[derive(Clone, Deserialize)]
pub struct DashboardConfig {
    /// OpenWeatherMap key, used for current weather and forecast.
    #[serde(default)]
    pub openweather_api_key: String,
    /// WAQI token. Without one the air quality card is never shown.
    #[serde(default)]
    pub air_quality_token: Option<String>,
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    #[serde(default = "default_air_quality_base_url")]
    pub air_quality_base_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// City queried when the page is opened without `?city=`.
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_weather_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_air_quality_base_url() -> String {
    DEFAULT_AIR_QUALITY_BASE_URL.to_string()
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

// Keys stay out of debug output, which ends up in logs.
impl fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("openweather_api_key", &"<redacted>")
            .field(
                "air_quality_token",
                &self.air_quality_token.as_ref().map(|_| "<redacted>"),
            )
            .field("weather_base_url", &self.weather_base_url)
            .field("air_quality_base_url", &self.air_quality_base_url)
            .field("listen_addr", &self.listen_addr)
            .field("default_city", &self.default_city)
            .finish()
    }
}

impl DashboardConfig {
    /// Loads the configuration from `path` (or the default location) and the
    /// environment, then validates it.
    ///
    /// A missing file is not an error; a missing API key is.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<PathBuf>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = path.or_else(Self::default_path) {
            log::debug!("Reading configuration from {}", file.display());
            builder = builder.add_source(File::from(file).required(false).format(FileFormat::Toml));
        }
        let settings = builder
            .add_source(env)
            .build()
            .map_err(ConfigError::Load)?;

        let mut config: DashboardConfig =
            settings.try_deserialize().map_err(ConfigError::Load)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/weatherpro/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    fn normalize(&mut self) {
        self.openweather_api_key = self.openweather_api_key.trim().to_string();
        self.air_quality_token = self
            .air_quality_token
            .take()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self.default_city = self.default_city.trim().to_string();
        if self.default_city.is_empty() {
            self.default_city = default_city();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openweather_api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        for (key, value) in [
            ("weather_base_url", &self.weather_base_url),
            ("air_quality_base_url", &self.air_quality_base_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidUrl {
                    key,
                    value: value.clone(),
                });
            }
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|e| ConfigError::InvalidListenAddr(self.listen_addr.clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_values_with_defaults() {
        let file = write_toml("openweather_api_key = \"file-key\"\ndefault_city = \"Paris\"\n");
        let config = DashboardConfig::load_with_env(Some(file.path().to_path_buf()), env_with(&[]))
            .unwrap();

        assert_eq!(config.openweather_api_key, "file-key");
        assert_eq!(config.default_city, "Paris");
        assert_eq!(config.air_quality_token, None);
        assert_eq!(config.weather_base_url, DEFAULT_WEATHER_BASE_URL);
        assert_eq!(config.air_quality_base_url, DEFAULT_AIR_QUALITY_BASE_URL);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8501".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = write_toml("openweather_api_key = \"file-key\"\n");
        let env = env_with(&[
            ("WEATHERPRO_OPENWEATHER_API_KEY", "env-key"),
            ("WEATHERPRO_AIR_QUALITY_TOKEN", "waqi-token"),
        ]);
        let config = DashboardConfig::load_with_env(Some(file.path().to_path_buf()), env).unwrap();

        assert_eq!(config.openweather_api_key, "env-key");
        assert_eq!(config.air_quality_token.as_deref(), Some("waqi-token"));
    }

    #[test]
    fn test_missing_file_and_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            DashboardConfig::load_with_env(Some(dir.path().join("absent.toml")), env_with(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_token_counts_as_absent() {
        let file = write_toml("openweather_api_key = \"k\"\nair_quality_token = \"  \"\n");
        let config = DashboardConfig::load_with_env(Some(file.path().to_path_buf()), env_with(&[]))
            .unwrap();
        assert_eq!(config.air_quality_token, None);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let file = write_toml("openweather_api_key = \"k\"\nweather_base_url = \"ftp://example.org\"\n");
        let result = DashboardConfig::load_with_env(Some(file.path().to_path_buf()), env_with(&[]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl { key: "weather_base_url", .. })
        ));
    }

    #[test]
    fn test_invalid_listen_addr_is_rejected() {
        let file = write_toml("openweather_api_key = \"k\"\nlisten_addr = \"localhost\"\n");
        let result = DashboardConfig::load_with_env(Some(file.path().to_path_buf()), env_with(&[]));
        assert!(matches!(result, Err(ConfigError::InvalidListenAddr(..))));
    }

    #[test]
    fn test_debug_output_hides_keys() {
        let file = write_toml("openweather_api_key = \"super-secret\"\nair_quality_token = \"also-secret\"\n");
        let config = DashboardConfig::load_with_env(Some(file.path().to_path_buf()), env_with(&[]))
            .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("also-secret"));
    }

    #[test]
    fn test_default_path_is_namespaced() {
        if let Some(path) = DashboardConfig::default_path() {
            assert!(path.ends_with("weatherpro/config.toml"));
        }
    }
}
