//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::RankingStrategy;

pub struct Config {
    figment: Figment,
}

/// Engine settings under the `search` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub strategy: RankingStrategy,
    /// Results shown by interactive hosts (the CLI) when no limit is given.
    /// The engine itself returns every match for an unlimited request.
    pub default_limit: usize,
    /// Upper bound on any requested limit.
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { strategy: RankingStrategy::Lexical, default_limit: 10, max_limit: 100 }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 || self.max_limit == 0 {
            return Err(Error::InvalidConfig("search limits must be at least 1".to_string()));
        }
        if self.default_limit > self.max_limit {
            return Err(Error::InvalidConfig(format!(
                "search.default_limit ({}) exceeds search.max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate_for_env(&env_name)?;
        Ok(config)
    }

    /// Build from an inline TOML document; used by tests and embedders.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let config = Self { figment: Figment::new().merge(Toml::string(toml)) };
        config.search()?.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Typed engine settings; defaults when the section is absent.
    pub fn search(&self) -> anyhow::Result<SearchSettings> {
        if self.figment.find_value("search").is_err() {
            return Ok(SearchSettings::default());
        }
        self.get("search")
    }

    /// A configured path, expanded and resolved against the working directory.
    pub fn path(&self, key: &str) -> Option<PathBuf> {
        let raw: String = self.get(key).ok()?;
        let base = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Some(resolve_with_base(&base, raw))
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let search = self.search()?;
        search.validate()?;
        if matches!(env, "prod" | "production") && self.path("catalog.path").is_none() {
            anyhow::bail!("production config must set catalog.path");
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
