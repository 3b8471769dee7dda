use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use screening_session::client::DEFAULT_SCORING_URL;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Full URL of the scoring service's predict endpoint.
    pub scoring_url: String,
    /// Request timeout. Absent means wait for the service indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            scoring_url: DEFAULT_SCORING_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ScreeningConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Apply `SCREENING_SCORING_URL` / `SCREENING_TIMEOUT_SECS` style
    /// overrides, looked up through `var`.
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        if let Some(url) = var("SCREENING_SCORING_URL") {
            self.scoring_url = url;
        }
        if let Some(secs) = var("SCREENING_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("invalid SCREENING_TIMEOUT_SECS '{secs}': {e}"))?;
            self.request_timeout_secs = Some(secs);
        }
        Ok(self)
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("screening"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, writing the defaults there first if the file
/// does not exist yet.
pub fn load_or_init_config(path: &Path) -> eyre::Result<ScreeningConfig> {
    if path.exists() {
        return load_config(path);
    }
    let config = ScreeningConfig::default();
    save_config(path, &config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> eyre::Result<ScreeningConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ScreeningConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: `endpoint` renamed to `scoring_url`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(endpoint) = obj.remove("endpoint") {
            obj.entry("scoring_url").or_insert(endpoint);
        }
        obj.entry("scoring_url")
            .or_insert(serde_json::Value::String(DEFAULT_SCORING_URL.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (endpoint → scoring_url)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScreeningConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
