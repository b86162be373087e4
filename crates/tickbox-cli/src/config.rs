use crate::args::Cli;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tickbox_types::UserId;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_ID: UserId = 1;

/// On-disk configuration, `$XDG_CONFIG_HOME/tickbox/config.toml`.
/// Every field is optional; resolution falls through to env vars and
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine a config directory for this platform")?;
        Ok(config_dir.join("tickbox").join("config.toml"))
    }
}

/// Fully-resolved session settings: flag > env > config file > default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub user_id: UserId,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;
        let env_api_url = std::env::var("TICKBOX_API_URL").ok();
        let env_user = std::env::var("TICKBOX_USER_ID").ok();
        Self::resolve_layers(
            cli.api_url.clone(),
            cli.user,
            env_api_url,
            env_user.as_deref(),
            config,
        )
    }

    fn resolve_layers(
        flag_api_url: Option<String>,
        flag_user: Option<UserId>,
        env_api_url: Option<String>,
        env_user: Option<&str>,
        config: Config,
    ) -> Result<Self> {
        let api_url = flag_api_url
            .or(env_api_url)
            .or(config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let env_user = env_user
            .map(|raw| {
                raw.parse::<UserId>()
                    .with_context(|| format!("TICKBOX_USER_ID is not a number: {:?}", raw))
            })
            .transpose()?;

        let user_id = flag_user
            .or(env_user)
            .or(config.user_id)
            .unwrap_or(DEFAULT_USER_ID);

        Ok(Self { api_url, user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert!(config.api_url.is_none());
        assert!(config.user_id.is_none());
        Ok(())
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");

        let config = Config {
            api_url: Some("https://todos.example.com/api".to_string()),
            user_id: Some(3054),
        };
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.api_url.as_deref(), Some("https://todos.example.com/api"));
        assert_eq!(loaded.user_id, Some(3054));
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [nonsense")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn flag_beats_env_beats_file_beats_default() -> Result<()> {
        let config = Config {
            api_url: Some("https://file.example.com".to_string()),
            user_id: Some(3),
        };

        let settings = Settings::resolve_layers(
            Some("https://flag.example.com".to_string()),
            Some(1),
            Some("https://env.example.com".to_string()),
            Some("2"),
            config.clone(),
        )?;
        assert_eq!(settings.api_url, "https://flag.example.com");
        assert_eq!(settings.user_id, 1);

        let settings = Settings::resolve_layers(
            None,
            None,
            Some("https://env.example.com".to_string()),
            Some("2"),
            config.clone(),
        )?;
        assert_eq!(settings.api_url, "https://env.example.com");
        assert_eq!(settings.user_id, 2);

        let settings = Settings::resolve_layers(None, None, None, None, config)?;
        assert_eq!(settings.api_url, "https://file.example.com");
        assert_eq!(settings.user_id, 3);

        let settings = Settings::resolve_layers(None, None, None, None, Config::default())?;
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.user_id, DEFAULT_USER_ID);
        Ok(())
    }

    #[test]
    fn bad_env_user_id_is_an_error() {
        let result =
            Settings::resolve_layers(None, None, None, Some("not-a-number"), Config::default());
        assert!(result.is_err());
    }
}
