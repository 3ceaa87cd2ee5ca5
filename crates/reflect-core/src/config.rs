use std::fs;
use std::path::Path;

use chrono::Weekday;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info
};

use crate::calendar::parse_week_start;
use crate::error::ConfigError;
use crate::transition::FADE_DURATION_MS;

const DEFAULT_ENDPOINT: &str =
  "https://reflections.example.com/get_reflection";
const DEFAULT_UID: &str = "demo-user";
const DEFAULT_COPY_FEEDBACK_MS: u32 =
  2_000;
const DEFAULT_WEEK_START: &str = "sunday";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct ReflectConfig {
  #[serde(default)]
  pub api: ApiConfig,
  #[serde(default)]
  pub ui:  UiConfig
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct ApiConfig {
  #[serde(default = "default_endpoint")]
  pub endpoint: String,
  #[serde(default = "default_uid")]
  pub uid:      String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct UiConfig {
  #[serde(default = "default_fade_ms")]
  pub fade_ms:          u32,
  #[serde(
    default = "default_copy_feedback_ms"
  )]
  pub copy_feedback_ms: u32,
  #[serde(
    default = "default_week_start"
  )]
  pub week_start:       String
}

fn default_endpoint() -> String {
  DEFAULT_ENDPOINT.to_string()
}

fn default_uid() -> String {
  DEFAULT_UID.to_string()
}

fn default_fade_ms() -> u32 {
  FADE_DURATION_MS
}

fn default_copy_feedback_ms() -> u32 {
  DEFAULT_COPY_FEEDBACK_MS
}

fn default_week_start() -> String {
  DEFAULT_WEEK_START.to_string()
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      endpoint: default_endpoint(),
      uid:      default_uid()
    }
  }
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      fade_ms:          default_fade_ms(),
      copy_feedback_ms:
        default_copy_feedback_ms(),
      week_start:       default_week_start()
    }
  }
}

impl Default for ReflectConfig {
  fn default() -> Self {
    Self {
      api: ApiConfig::default(),
      ui:  UiConfig::default()
    }
  }
}

impl ReflectConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let mut config: Self =
      toml::from_str(raw)?;
    config.sanitize();
    Ok(config)
  }

  #[tracing::instrument]
  pub fn load_file(
    path: &Path
  ) -> Result<Self, ConfigError> {
    let raw = fs::read_to_string(path)
      .map_err(|source| {
        ConfigError::Read {
          path: path.display().to_string(),
          source
        }
      })?;
    let config = Self::from_toml_str(&raw)?;
    info!(
      endpoint = %config.api.endpoint,
      "loaded reflect config"
    );
    Ok(config)
  }

  /// Replaces endpoint and uid with explicit overrides, ignoring blank
  /// values.
  pub fn apply_overrides(
    &mut self,
    endpoint: Option<&str>,
    uid: Option<&str>
  ) {
    if let Some(endpoint) = endpoint
      .map(str::trim)
      .filter(|v| !v.is_empty())
    {
      debug!(endpoint, "overriding api endpoint");
      self.api.endpoint =
        endpoint.to_string();
    }
    if let Some(uid) = uid
      .map(str::trim)
      .filter(|v| !v.is_empty())
    {
      debug!("overriding api uid");
      self.api.uid = uid.to_string();
    }
  }

  #[must_use]
  pub fn week_start(&self) -> Weekday {
    parse_week_start(&self.ui.week_start)
  }

  fn sanitize(&mut self) {
    if self.api.endpoint.trim().is_empty()
    {
      self.api.endpoint =
        default_endpoint();
    }
    if self.api.uid.trim().is_empty() {
      self.api.uid = default_uid();
    }
    if self.ui.fade_ms == 0 {
      self.ui.fade_ms = default_fade_ms();
    }
    if self.ui.copy_feedback_ms == 0 {
      self.ui.copy_feedback_ms =
        default_copy_feedback_ms();
    }
    if self
      .ui
      .week_start
      .trim()
      .is_empty()
    {
      self.ui.week_start =
        default_week_start();
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn partial_file_keeps_defaults() {
    let config =
      ReflectConfig::from_toml_str(
        "[api]\nuid = \"alice\"\n"
      )
      .expect("parse config");
    assert_eq!(config.api.uid, "alice");
    assert_eq!(
      config.api.endpoint,
      DEFAULT_ENDPOINT
    );
    assert_eq!(
      config.ui.copy_feedback_ms,
      2_000
    );
    assert_eq!(
      config.week_start(),
      Weekday::Sun
    );
  }

  #[test]
  fn blank_and_zero_values_are_sanitized(
  ) {
    let config =
      ReflectConfig::from_toml_str(
        "[api]\nendpoint = \" \"\n[ui]\nfade_ms = 0\nweek_start = \"Monday\"\n"
      )
      .expect("parse config");
    assert_eq!(
      config.api.endpoint,
      DEFAULT_ENDPOINT
    );
    assert_eq!(
      config.ui.fade_ms,
      FADE_DURATION_MS
    );
    assert_eq!(
      config.week_start(),
      Weekday::Mon
    );
  }

  #[test]
  fn loads_from_disk_and_applies_overrides(
  ) {
    let mut file =
      tempfile::NamedTempFile::new()
        .expect("temp file");
    writeln!(
      file,
      "[api]\nendpoint = \"http://localhost:8080/get_reflection\""
    )
    .expect("write config");

    let mut config =
      ReflectConfig::load_file(file.path())
        .expect("load config");
    config.apply_overrides(
      None,
      Some("bob")
    );
    assert_eq!(
      config.api.endpoint,
      "http://localhost:8080/get_reflection"
    );
    assert_eq!(config.api.uid, "bob");
  }

  #[test]
  fn missing_file_is_a_read_error() {
    let err = ReflectConfig::load_file(
      Path::new("/nonexistent/reflect.toml")
    )
    .expect_err("missing file");
    assert!(matches!(
      err,
      ConfigError::Read { .. }
    ));
  }
}
