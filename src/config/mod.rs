use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub ui: UiConfig,
    pub paths: PathsConfig,
    pub lyrics: LyricsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Scroll lyrics with the mouse wheel.
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Use Nerd Font glyphs; plain ASCII otherwise.
    pub nerd_font: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Log file location for the interactive UI.
    pub data_dir: PathBuf,
    /// Where saved lyrics go.
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    /// Providers in the order they are tried: "fly", "ninjas", "lrclib", "ovh".
    pub providers: Vec<String>,
    /// Per-request timeout applied to every provider; unset or 0 keeps each
    /// provider's own default.
    pub timeout_secs: Option<u64>,
    /// Sent as `X-Api-Key` to api-ninjas.com.
    pub api_ninjas_key: Option<String>,
    /// Skip certificate verification for lyrics.ovh only.
    pub ovh_accept_invalid_certs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { nerd_font: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("dev", "lyrics-finder", "lyrics-finder")
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("lyrics-finder"));
        let export_dir = UserDirs::new()
            .and_then(|u| u.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| data_dir.join("exports"));
        Self {
            data_dir,
            export_dir,
        }
    }
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            providers: crate::lyrics::ProviderKind::DEFAULT_ORDER
                .iter()
                .map(|k| k.key().to_string())
                .collect(),
            timeout_secs: None,
            api_ninjas_key: None,
            ovh_accept_invalid_certs: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LyricsConfig {
    /// `timeout_secs` as a per-request timeout. Zero means "keep each
    /// provider's default".
    pub fn timeout_override(&self) -> Option<Duration> {
        self.timeout_secs.filter(|&secs| secs > 0).map(Duration::from_secs)
    }
}

impl LogConfig {
    pub fn max_level(&self) -> tracing::Level {
        self.level.trim().parse().unwrap_or(tracing::Level::INFO)
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path).context("save config")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "lyrics-finder", "lyrics-finder")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Load the config, writing the defaults on first run.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        write_config(&cfg, &path).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    // May hold an API key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(cfg.input.mouse);
        assert!(cfg.ui.nerd_font);
        assert_eq!(cfg.lyrics.providers, vec!["fly", "ninjas", "lrclib", "ovh"]);
        assert!(!cfg.lyrics.ovh_accept_invalid_certs);
        assert_eq!(cfg.log.max_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[lyrics]
providers = ["lrclib", "ovh"]
timeout_secs = 5

[ui]
nerd_font = false

[log]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(cfg.lyrics.providers, vec!["lrclib", "ovh"]);
        assert_eq!(cfg.lyrics.timeout_secs, Some(5));
        assert_eq!(cfg.lyrics.api_ninjas_key, None);
        assert!(cfg.input.mouse);
        assert!(!cfg.ui.nerd_font);
        assert_eq!(cfg.log.max_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_timeout_override() {
        let mut lyrics = LyricsConfig::default();
        assert_eq!(lyrics.timeout_override(), None);
        lyrics.timeout_secs = Some(0);
        assert_eq!(lyrics.timeout_override(), None);
        lyrics.timeout_secs = Some(7);
        assert_eq!(lyrics.timeout_override(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let log = LogConfig {
            level: "chatty".into(),
        };
        assert_eq!(log.max_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.lyrics.providers.len(), 4);

        let mut changed = cfg.clone();
        changed.lyrics.api_ninjas_key = Some("secret".into());
        save(&changed, Some(&path)).unwrap();
        let reloaded = load(Some(&path)).unwrap();
        assert_eq!(reloaded.lyrics.api_ninjas_key.as_deref(), Some("secret"));
    }
}
