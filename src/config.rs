use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE, CONTENT_TYPE_JSON};

/// How response statuses map onto resolved/rejected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Only exactly 200 resolves. 201 and 204 are rejected too.
    #[default]
    ExactOk,
    /// Any 2xx resolves
    AnySuccess,
}

/// Fetcher configuration, loaded from YAML
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base that relative URIs such as `/api/items` are joined onto
    pub base_url: Option<String>,
    pub content_type: String,
    pub status_policy: StatusPolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            base_url: None,
            content_type: CONTENT_TYPE_JSON.to_string(),
            status_policy: StatusPolicy::ExactOk,
        }
    }
}

impl FetchConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// `~/.banner-fetch/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: FetchConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that could never go out on the wire
    pub fn validate(&self) -> Result<()> {
        if reqwest::header::HeaderValue::from_str(&self.content_type).is_err() {
            bail!("content_type {:?} is not a valid header value", self.content_type);
        }
        Ok(())
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(FetchConfig::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.content_type, "Application/json");
        assert_eq!(config.status_policy, StatusPolicy::ExactOk);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_load_partial_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://localhost:3000\nstatus_policy: any_success\n").unwrap();

        let config = FetchConfig::load(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.status_policy, StatusPolicy::AnySuccess);
        assert_eq!(config.content_type, "Application/json");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = FetchConfig::load_or_default(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, FetchConfig::default());
    }

    #[test]
    fn test_bad_content_type_is_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "content_type: \"bad\\nvalue\"\n").unwrap();

        let err = FetchConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("content_type"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "status_policy: sometimes\n").unwrap();
        assert!(FetchConfig::load(&path).is_err());
    }
}
