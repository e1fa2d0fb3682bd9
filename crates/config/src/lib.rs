//! Manages application configuration by loading settings from standard locations.
//!
//! This crate provides a unified configuration object (`Config`) that aggregates
//! settings from the built-in defaults, the user's configuration directory, the
//! working directory and environment variables, making them accessible globally
//! via a lazily initialized static reference (`CONFIG`).
//!
//! Later layers override earlier ones:
//!
//! 1. `nuframe.default.toml`, compiled into the binary
//! 2. `<config dir>/nuframe.toml`
//! 3. `./.nuframe.toml`
//! 4. `NUFRAME_*` environment variables, with `__` separating nested keys
//!    (`NUFRAME_FOLDERS__STRICT=true`)

use std::collections::BTreeMap;
use std::sync::LazyLock;

use etcetera::BaseStrategy;
use figment::providers::{Env, Format, Toml};
use figment::{Figment, Metadata, Provider};
use serde::{Deserialize, Serialize};

/// The default configuration values
const DEFAULT_TOML_CONFIG: &str = include_str!("./nuframe.default.toml");

/// Name of the per-directory configuration file.
const LOCAL_CONFIG: &str = ".nuframe.toml";

//================================================================================================
// Statics
//================================================================================================

/// Provides a lazily instantiated static reference to the application `Config`.
///
/// This static variable ensures that configuration is parsed only once from
/// canonical locations and then made immutably available throughout the
/// application's lifecycle.
pub static CONFIG: LazyLock<Config> = LazyLock::new(load_config);

//================================================================================================
// Types
//================================================================================================

/// How package paths are resolved to frameworks.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct FolderConfig {
    /// Fail on folders that do not name a specific framework.
    #[serde(default)]
    pub strict: bool,
    /// Root folders to recognize; empty selects the standard package folders.
    #[serde(default)]
    pub roots: Vec<String>,
}

/// The format results are printed in.
#[derive(Deserialize, Serialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human readable line per result.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

/// Output-related settings.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// The format results are printed in.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Represents the application's primary configuration structure.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Folder resolution settings.
    #[serde(default)]
    pub folders: FolderConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// User-defined names for frameworks.
    #[serde(default)]
    aliases: Aliases,
}

/// Alias name to framework token.
type Aliases = BTreeMap<String, String>;

//================================================================================================
// Impls
//================================================================================================

impl Config {
    /// Returns a reference to the framework aliases.
    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Expands `token` if it names an alias, ignoring case; returns it unchanged otherwise.
    pub fn resolve_alias<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
            .map_or(token, |(_, target)| target.as_str())
    }

    /// Constructs a `Figment` instance for configuration loading.
    ///
    /// This method builds a configuration provider by layering default settings,
    /// user-specific configuration files, the working directory's configuration
    /// file and environment variables.
    pub fn figment() -> Figment {
        let mut fig = Figment::from(Config::default()).merge(Toml::string(DEFAULT_TOML_CONFIG));

        if let Ok(c) = etcetera::choose_base_strategy() {
            let config = c.config_dir().join("nuframe.toml");
            fig = fig.admerge(Toml::file(config));
        }

        fig.admerge(Toml::file(LOCAL_CONFIG))
            .admerge(Env::prefixed("NUFRAME_").split("__"))
    }

    /// Creates a `Config` instance from a given provider.
    pub fn from<T: Provider>(provider: T) -> Result<Config, Box<figment::Error>> {
        Figment::from(provider).extract().map_err(Box::new)
    }
}

impl Provider for Config {
    fn metadata(&self) -> figment::Metadata {
        Metadata::named("nuframe CLI Config")
    }

    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        figment::providers::Serialized::defaults(self).data()
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Loads the application configuration using the default `Figment` provider.
///
/// This function is used to initialize the `CONFIG` static variable.
fn load_config() -> Config {
    Config::figment().extract().unwrap_or_else(|e| {
        tracing::error!(error = %e, "problem loading config from default sources, falling back to the built-in defaults");
        Config::default()
    })
}

//================================================================================================
// Tests
//================================================================================================
