//! Configuration management for hsutil.
//!
//! Holds everything needed to reach the Hubstaff API: credentials, the API
//! root and the organization the report is scoped to, plus pagination limits.
//!
//! ## Storage
//!
//! The configuration is a pretty-printed JSON file in the platform data
//! directory (see [`DataStorage`]):
//!
//! - **Windows**: `%LOCALAPPDATA%\hsutil\hsutil\config.json`
//! - **macOS**: `~/Library/Application Support/hsutil/hsutil/config.json`
//! - **Linux**: `~/.local/share/hsutil/hsutil/config.json`
//!
//! A different file can be passed with `--config`. The password may be left
//! out of the file, in which case it is prompted for on every run.
//!
//! ## Example File
//!
//! ```json
//! {
//!   "hubstaff": {
//!     "email": "manager@example.com",
//!     "app_token": "abc123",
//!     "base_url": "https://api.hubstaff.com",
//!     "api_version": "v1",
//!     "org_name": "Example Inc",
//!     "page_limit": 500,
//!     "max_pages": 1000
//!   }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::api::DEFAULT_MAX_PAGES;
use crate::libs::error::{HubstaffError, Result};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_BASE_URL: &str = "https://api.hubstaff.com";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Largest page the service will return.
pub const DEFAULT_PAGE_LIMIT: u32 = 500;

/// Hubstaff connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HubstaffConfig {
    /// Login email of the reporting account.
    pub email: String,

    /// Login password. Prompted for when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Application token issued by Hubstaff, sent with every request.
    pub app_token: String,

    /// API root without the version segment.
    pub base_url: String,

    pub api_version: String,

    /// Name of the organization whose projects are reported.
    pub org_name: String,

    /// Page size requested from the service.
    pub page_limit: u32,

    /// Hop cap for a single page sequence. `null` disables it.
    pub max_pages: Option<usize>,
}

impl Default for HubstaffConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: None,
            app_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            org_name: String::new(),
            page_limit: DEFAULT_PAGE_LIMIT,
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

impl HubstaffConfig {
    /// Versioned API root, e.g. `https://api.hubstaff.com/v1`.
    pub fn api_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.api_version.trim_matches('/'))
    }

    /// Fails with every empty required field listed at once, or on a zero
    /// page size or hop cap.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("email", &self.email),
            ("app_token", &self.app_token),
            ("base_url", &self.base_url),
            ("api_version", &self.api_version),
            ("org_name", &self.org_name),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(HubstaffError::Configuration(format!(
                "Config file missing following values: {}",
                missing.join(", ")
            )));
        }
        if self.page_limit == 0 {
            return Err(HubstaffError::Configuration("page_limit must be at least 1".to_string()));
        }
        if self.max_pages == Some(0) {
            return Err(HubstaffError::Configuration(
                "max_pages must be at least 1, or null to disable the limit".to_string(),
            ));
        }
        Ok(())
    }

    /// Stored password, or an interactive prompt when none is stored.
    pub fn password_or_prompt(&self) -> anyhow::Result<String> {
        match &self.password {
            Some(password) if !password.is_empty() => Ok(password.clone()),
            _ => Ok(Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPassword.to_string())
                .interact()?),
        }
    }

    /// Interactive setup with `config` values as defaults.
    pub fn init(config: &Option<HubstaffConfig>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleHubstaff);

        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .default(config.email)
            .interact_text()?;
        let password: String = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorePassword.to_string())
            .allow_empty_password(true)
            .interact()?;

        Ok(Self {
            email,
            password: if password.is_empty() { config.password } else { Some(password) },
            app_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAppToken.to_string())
                .default(config.app_token)
                .interact_text()?,
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBaseUrl.to_string())
                .default(config.base_url)
                .interact_text()?,
            api_version: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiVersion.to_string())
                .default(config.api_version)
                .interact_text()?,
            org_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptOrgName.to_string())
                .default(config.org_name)
                .interact_text()?,
            page_limit: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPageLimit.to_string())
                .default(config.page_limit)
                .interact_text()?,
            max_pages: config.max_pages,
        })
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubstaff: Option<HubstaffConfig>,
}

impl Config {
    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the default configuration file; a missing file yields an empty config.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::default_path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        Self::parse(&config_file_path)
    }

    /// Reads an explicitly given configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the JSON file
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or a configuration error if the file
    /// does not exist or is not valid JSON.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(HubstaffError::Configuration(format!(
                "{} does not exist. Cannot load credentials via configuration file.",
                path.display()
            )));
        }
        Self::parse(path)
    }

    /// `read_from(path)` when a path is given, `read()` otherwise.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::read_from(path),
            None => Self::read(),
        }
    }

    fn parse(path: &Path) -> Result<Config> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| HubstaffError::Configuration(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// The validated Hubstaff section.
    ///
    /// # Returns
    ///
    /// Returns the section, or a configuration error if it is absent or
    /// fails [`HubstaffConfig::validate`].
    pub fn hubstaff(&self) -> Result<&HubstaffConfig> {
        let hubstaff = self
            .hubstaff
            .as_ref()
            .ok_or_else(|| HubstaffError::Configuration(Message::ConfigHubstaffMissing.to_string()))?;
        hubstaff.validate()?;
        Ok(hubstaff)
    }

    /// Writes the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the default configuration file.
    ///
    /// # Returns
    ///
    /// Returns `true` if a file was removed, `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::default_path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// The stored configuration, or the default one with a warning when the
    /// file cannot be read.
    pub fn read_or_default() -> Config {
        match Self::read() {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(Message::ConfigLoadFailed(e.to_string()));
                Config::default()
            }
        }
    }

    /// Interactive setup wizard starting from the stored configuration.
    pub fn init() -> anyhow::Result<Self> {
        let mut config = Self::read_or_default();
        config.hubstaff = Some(HubstaffConfig::init(&config.hubstaff)?);
        Ok(config)
    }
}
