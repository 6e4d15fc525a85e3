use anyhow::{Context, anyhow};
use gamefront_core::settings::{
    BannerSettings, CarouselSettings, FeedSettings, StaggerSettings,
};
use serde::{Deserialize, Serialize};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info};

use crate::error::{ConfigGuardRailError, ConfigLoadError};

pub const CONFIG_PATH_VAR: &str = "GAMEFRONT_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "GAMEFRONT_CONFIG_JSON";
pub const AUTO_ADVANCE_VAR: &str = "GAMEFRONT_AUTO_ADVANCE";
pub const AUTO_ADVANCE_INTERVAL_VAR: &str = "GAMEFRONT_AUTO_ADVANCE_INTERVAL";
pub const RESET_DEBOUNCE_VAR: &str = "GAMEFRONT_RESET_DEBOUNCE";
pub const MAX_PAGE_ATTEMPTS_VAR: &str = "GAMEFRONT_MAX_PAGE_ATTEMPTS";
pub const FIXTURE_VAR: &str = "GAMEFRONT_FIXTURE";

/// Source that produced the storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::EnvPath(path) => {
                write!(f, "${CONFIG_PATH_VAR} ({})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_JSON_VAR}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Every tunable of the storefront engines. Sections that a file leaves out
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Drag threshold, re-center delay and auto-advance of the featured
    /// carousel.
    pub carousel: CarouselSettings,
    /// Retry budget and delays of the infinite feed.
    pub feed: FeedSettings,
    /// Entrance animation cadence for feed cards.
    pub stagger: StaggerSettings,
    /// Loading indicator timing for the featured banners.
    pub banners: BannerSettings,
    /// JSON fixture catalog served by the command-line host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration using environment variables.
    ///
    /// Reads `.env` first, then evaluates in order:
    /// 1) `$GAMEFRONT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$GAMEFRONT_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults.
    ///
    /// Individual `GAMEFRONT_*` overrides are applied on top and the result
    /// is validated.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err).context("failed to read .env"),
        }
        Self::load_with(|key| env::var(key).ok())
    }

    /// [`load_from_env`](Self::load_from_env) against an arbitrary variable
    /// lookup, without touching `.env`.
    pub fn load_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (mut config, source) = if let Some(path_str) = var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            (config, ConfigSource::EnvPath(path))
        } else if let Some(raw) = var(CONFIG_JSON_VAR) {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            (parsed, ConfigSource::EnvInline)
        } else if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            (config, ConfigSource::File(path))
        } else {
            (Self::default(), ConfigSource::Default)
        };

        config
            .apply_overrides(&var)
            .context("invalid GAMEFRONT_* override")?;
        config
            .validate()
            .with_context(|| format!("invalid configuration from {source}"))?;

        info!(%source, "storefront configuration loaded");
        Ok((config, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read storefront config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid storefront config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid storefront config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse TOML, falling back to JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse storefront config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid storefront config json: {err}"))
    }

    /// Apply the single-value `GAMEFRONT_*` overrides.
    pub fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigLoadError> {
        if let Some(raw) = var(AUTO_ADVANCE_VAR) {
            self.carousel.auto_advance = parse_bool(AUTO_ADVANCE_VAR, &raw)?;
        }
        if let Some(raw) = var(AUTO_ADVANCE_INTERVAL_VAR) {
            self.carousel.auto_advance_interval_ms =
                millis(parse_duration(AUTO_ADVANCE_INTERVAL_VAR, &raw)?);
        }
        if let Some(raw) = var(RESET_DEBOUNCE_VAR) {
            self.feed.reset_debounce_ms =
                millis(parse_duration(RESET_DEBOUNCE_VAR, &raw)?);
        }
        if let Some(raw) = var(MAX_PAGE_ATTEMPTS_VAR) {
            self.feed.max_attempts = raw.trim().parse().map_err(|source| {
                ConfigLoadError::InvalidInteger {
                    var: MAX_PAGE_ATTEMPTS_VAR,
                    value: raw.clone(),
                    source,
                }
            })?;
        }
        if let Some(raw) = var(FIXTURE_VAR) {
            self.fixture = Some(PathBuf::from(raw));
        }
        Ok(())
    }

    /// Check the invariants the engines depend on.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        let threshold = self.carousel.swipe_threshold_px;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(ConfigGuardRailError::SwipeThreshold(threshold));
        }
        if self.carousel.auto_advance && self.carousel.auto_advance_interval_ms == 0 {
            return Err(ConfigGuardRailError::AutoAdvanceInterval);
        }
        if self.feed.max_attempts == 0 {
            return Err(ConfigGuardRailError::MaxAttempts);
        }
        Ok(())
    }

    /// Render as TOML, the format of the default config file.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("failed to render storefront config")
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "gamefront.toml",
            "gamefront.json",
            "config/gamefront.toml",
            "config/gamefront.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigLoadError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigLoadError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

fn parse_duration(var: &'static str, raw: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            var,
            value: raw.to_string(),
            source,
        }
    })
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
