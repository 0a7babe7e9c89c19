use anyhow::{Context, anyhow};
use dvdnav_core::{SessionOptions, StillReleasePolicy};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const CONFIG_PATH_VAR: &str = "DVDNAV_CONFIG_PATH";
const CONFIG_JSON_VAR: &str = "DVDNAV_CONFIG_JSON";

/// Source that produced the navigator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigatorConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Behavior of interactive menu navigation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Which activations release a still frame when no button is selected.
    /// `any_invalid_selection` treats any out-of-range selection like a menu
    /// without buttons; `zero_buttons_only` reports such activations as
    /// errors unless the packet really has no buttons.
    pub still_release: StillReleasePolicy,
    /// Activate auto-action buttons as soon as directional input lands on
    /// them. Turn off to require an explicit confirm.
    pub follow_auto_action: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            still_release: StillReleasePolicy::default(),
            follow_auto_action: true,
            log_filter: "info".to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Load overrides using environment variables.
    /// Evaluation order:
    /// 1) `$DVDNAV_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$DVDNAV_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, NavigatorConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, NavigatorConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, NavigatorConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(Path::new(".")) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, NavigatorConfigSource::File(path)));
        }

        Ok((Self::default(), NavigatorConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read navigator config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid navigator config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid navigator config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse navigator config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid navigator config json: {err}"))
    }

    /// First of the conventional config file names that exists under `dir`.
    pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "dvdnav.toml",
            "dvdnav.json",
            "config/dvdnav.toml",
            "config/dvdnav.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.exists())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            still_release: self.still_release,
            follow_auto_action: self.follow_auto_action,
        }
    }
}
