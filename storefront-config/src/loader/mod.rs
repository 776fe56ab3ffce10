//! Layered configuration loading: defaults, then an optional TOML file, then
//! environment overrides.

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use storefront_model::CountryCode;

use crate::models::HomeConfig;
use crate::util::{env_f32, env_path};

use self::error::ConfigLoadError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "STOREFRONT_CONFIG";
/// Override for `storefront.country_code`.
pub const COUNTRY_CODE_VAR: &str = "STOREFRONT_COUNTRY_CODE";
/// Override for `storefront.catalog_path`.
pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
/// Override for `rail.scroll_step`.
pub const SCROLL_STEP_VAR: &str = "STOREFRONT_SCROLL_STEP";

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

/// Where the file layer of a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// No file was read.
    #[default]
    Defaults,
    /// A file named by [`CONFIG_PATH_VAR`] or [`ConfigLoader::with_file`].
    Explicit(PathBuf),
    /// The implicit [`DEFAULT_CONFIG_FILE`].
    Discovered(PathBuf),
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// Merged and validated configuration.
    pub config: HomeConfig,
    /// File layer provenance, for logging.
    pub source: ConfigSource,
    /// Environment variables that overrode file or default values.
    pub overrides: Vec<&'static str>,
}

/// Builder for a configuration load.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_file: Option<PathBuf>,
    search_dir: PathBuf,
    vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Loader reading the process environment, after applying `.env` from the
    /// working directory when present.
    pub fn from_process_env() -> Result<Self, ConfigLoadError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }
        Ok(Self::with_vars(std::env::vars()))
    }

    /// Loader over an explicit variable set. Nothing is read from the
    /// process environment.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            explicit_file: None,
            search_dir: PathBuf::from("."),
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Read this file instead of consulting [`CONFIG_PATH_VAR`].
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Directory searched for [`DEFAULT_CONFIG_FILE`].
    pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Merge all layers and validate the result.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.load_file_layer()?;
        let overrides = self.apply_env(&mut config)?;
        validate(&config)?;

        info!(
            "configuration loaded from {:?} ({} env overrides)",
            source,
            overrides.len()
        );
        Ok(ConfigLoad {
            config,
            source,
            overrides,
        })
    }

    fn load_file_layer(
        &self,
    ) -> Result<(HomeConfig, ConfigSource), ConfigLoadError> {
        let explicit = self
            .explicit_file
            .clone()
            .or_else(|| self.var(CONFIG_PATH_VAR).map(PathBuf::from));

        if let Some(path) = explicit {
            let config = read_file(&path)?;
            return Ok((config, ConfigSource::Explicit(path)));
        }

        let discovered = self.search_dir.join(DEFAULT_CONFIG_FILE);
        if discovered.is_file() {
            let config = read_file(&discovered)?;
            return Ok((config, ConfigSource::Discovered(discovered)));
        }

        Ok((HomeConfig::default(), ConfigSource::Defaults))
    }

    fn apply_env(
        &self,
        config: &mut HomeConfig,
    ) -> Result<Vec<&'static str>, ConfigLoadError> {
        let mut applied = Vec::new();

        if let Some(raw) = self.var(COUNTRY_CODE_VAR) {
            config.storefront.country_code =
                CountryCode::parse(raw).map_err(|err| {
                    ConfigLoadError::InvalidEnv {
                        key: COUNTRY_CODE_VAR,
                        value: raw.to_string(),
                        reason: err.to_string(),
                    }
                })?;
            applied.push(COUNTRY_CODE_VAR);
        }

        if let Some(path) = env_path(self.var(CATALOG_VAR)) {
            config.storefront.catalog_path = Some(path);
            applied.push(CATALOG_VAR);
        }

        if let Some(step) = env_f32(SCROLL_STEP_VAR, self.var(SCROLL_STEP_VAR))? {
            config.rail.scroll_step = step;
            applied.push(SCROLL_STEP_VAR);
        }

        Ok(applied)
    }
}

fn read_file(path: &Path) -> Result<HomeConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Guard rails that serde defaults alone cannot express.
pub fn validate(config: &HomeConfig) -> Result<(), ConfigLoadError> {
    let step = config.rail.scroll_step;
    if !step.is_finite() || step <= 0.0 {
        return Err(ConfigLoadError::Invalid(format!(
            "rail.scroll_step must be a positive number of pixels, got {step}"
        )));
    }
    let window = config.window;
    if !(window.width > 0.0 && window.height > 0.0) {
        return Err(ConfigLoadError::Invalid(format!(
            "window size must be non-zero, got {}x{}",
            window.width, window.height
        )));
    }
    Ok(())
}
