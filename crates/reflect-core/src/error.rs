use thiserror::Error;

/// Terminal failure of one reflection load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
  #[error("HTTP error! status: {0}")]
  Status(u16),

  #[error(
    "invalid data received from the \
     reflection API"
  )]
  InvalidData,

  #[error("{0}")]
  Network(String),

  #[error(
    "invalid date {0:?}; expected \
     YYYY-MM-DD"
  )]
  InvalidDate(String)
}

impl LoadError {
  /// Text shown in place of the loading indicator.
  #[must_use]
  pub fn user_message(&self) -> String {
    format!(
      "Error loading reflection: {self}"
    )
  }
}

/// Reasons the copy action did not reach the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
  #[error(
    "No tasks selected. Check the \
     tasks you want to copy first."
  )]
  NothingSelected,

  #[error(
    "Clipboard is not available in \
     this browser."
  )]
  Unavailable,

  #[error("Failed to copy tasks: {0}")]
  Rejected(String)
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {path}: {source}")]
  Read {
    path:   String,
    #[source]
    source: std::io::Error
  },

  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error)
}
