use chrono::NaiveDate;
use url::Url;

use crate::config::ApiConfig;
use crate::datetime::{
  format_local_date,
  resolve_target_date
};
use crate::document::{
  ReflectionDocument,
  parse_document
};
use crate::error::LoadError;
use crate::slides::{
  Slide,
  build_slides
};
use crate::tasks::TaskAggregator;

/// Status line and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
  pub status: u16,
  pub body:   String
}

impl RawResponse {
  #[must_use]
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// How a load reaches the reflection API. The browser uses `fetch`, the
/// CLI uses an HTTP client; tests use canned responses.
#[allow(async_fn_in_trait)]
pub trait ReflectionTransport {
  /// Performs a GET. Transport-level failures map to
  /// [`LoadError::Network`]; any HTTP status is a successful
  /// exchange here.
  async fn get(
    &self,
    url: &str
  ) -> Result<RawResponse, LoadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionRequest {
  pub date: NaiveDate,
  pub url:  String
}

impl ReflectionRequest {
  /// Builds the request for `date_override`, or `today` when absent.
  pub fn new(
    api: &ApiConfig,
    date_override: Option<&str>,
    today: NaiveDate
  ) -> Result<Self, LoadError> {
    let date = resolve_target_date(
      date_override,
      today
    )?;
    let mut url =
      Url::parse(api.endpoint.trim())
        .map_err(|error| {
          LoadError::Network(format!(
            "invalid endpoint {:?}: \
             {error}",
            api.endpoint
          ))
        })?;
    url
      .query_pairs_mut()
      .append_pair("uid", &api.uid)
      .append_pair(
        "date",
        &format_local_date(date)
      );
    Ok(Self {
      date,
      url: url.into()
    })
  }

  #[must_use]
  pub fn date_string(&self) -> String {
    format_local_date(self.date)
  }
}

/// Everything one successful load produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReflection {
  pub date:     String,
  pub document: ReflectionDocument,
  pub slides:   Vec<Slide>,
  pub tasks:    TaskAggregator
}

impl LoadedReflection {
  #[must_use]
  pub fn from_document(
    date: String,
    document: ReflectionDocument
  ) -> Self {
    if document.is_processing_failure() {
      tracing::warn!(
        date = %date,
        "reflection API returned its processing failure placeholder"
      );
    }
    let slides =
      build_slides(&document, &date);
    let tasks = TaskAggregator::from_parts(
      &document.action_items,
      &document.little_things
    );
    Self {
      date,
      document,
      slides,
      tasks
    }
  }
}

/// Validates an HTTP exchange and decodes the reflection document.
pub fn interpret_response(
  response: &RawResponse
) -> Result<ReflectionDocument, LoadError> {
  if !response.is_success() {
    tracing::warn!(
      status = response.status,
      "reflection API returned an error status"
    );
    return Err(LoadError::Status(
      response.status
    ));
  }
  parse_document(&response.body)
}

/// Full pipeline for one request: fetch, validate, build slides and
/// tasks.
#[tracing::instrument(skip(transport), fields(date = %request.date))]
pub async fn load_reflection<T>(
  transport: &T,
  request: &ReflectionRequest
) -> Result<LoadedReflection, LoadError>
where
  T: ReflectionTransport
{
  tracing::info!(url = %request.url, "fetching reflection");
  let response =
    transport.get(&request.url).await?;
  let document =
    interpret_response(&response)?;
  let loaded =
    LoadedReflection::from_document(
      request.date_string(),
      document
    );
  tracing::info!(
    task_count = loaded.tasks.tasks().len(),
    "reflection loaded"
  );
  Ok(loaded)
}

/// Ticket identifying one started load.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct LoadTicket(u64);

impl LoadTicket {
  #[must_use]
  pub fn value(self) -> u64 {
    self.0
  }
}

/// Sequence guard for overlapping loads: only the most recently
/// started load may render its result.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct LoadSequence {
  latest: u64
}

impl LoadSequence {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn begin(&mut self) -> LoadTicket {
    self.latest =
      self.latest.wrapping_add(1);
    LoadTicket(self.latest)
  }

  #[must_use]
  pub fn is_current(
    &self,
    ticket: LoadTicket
  ) -> bool {
    ticket.0 == self.latest
  }

  #[must_use]
  pub fn latest(&self) -> u64 {
    self.latest
  }

  /// Passes `outcome` through when `ticket` is still the newest load.
  /// Anything finished by a superseded load is dropped here.
  #[must_use]
  pub fn accept(
    &self,
    ticket: LoadTicket,
    outcome: Result<LoadedReflection, LoadError>
  ) -> Option<Result<LoadedReflection, LoadError>>
  {
    if self.is_current(ticket) {
      return Some(outcome);
    }
    tracing::debug!(
      ticket = ticket.value(),
      latest = self.latest,
      ok = outcome.is_ok(),
      "dropping superseded reflection response"
    );
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn api() -> ApiConfig {
    ApiConfig {
      endpoint: "https://api.test/get_reflection"
        .to_string(),
      uid:      "user 1&2".to_string()
    }
  }

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17)
      .expect("valid date")
  }

  #[test]
  fn request_carries_uid_and_date() {
    let request = ReflectionRequest::new(
      &api(),
      None,
      today()
    )
    .expect("build request");
    assert_eq!(
      request.url,
      "https://api.test/get_reflection?uid=user+1%262&date=2026-10-17"
    );
  }

  #[test]
  fn override_date_wins_over_today() {
    let request = ReflectionRequest::new(
      &api(),
      Some("2026-01-05"),
      today()
    )
    .expect("build request");
    assert_eq!(
      request.date_string(),
      "2026-01-05"
    );
    assert!(
      request.url.ends_with("date=2026-01-05")
    );
  }

  #[test]
  fn bad_override_is_rejected_before_fetch(
  ) {
    assert_eq!(
      ReflectionRequest::new(
        &api(),
        Some("17/10/2026"),
        today()
      ),
      Err(LoadError::InvalidDate(
        "17/10/2026".to_string()
      ))
    );
  }

  #[test]
  fn non_success_status_is_reported() {
    let response = RawResponse {
      status: 503,
      body:   "{}".to_string()
    };
    assert_eq!(
      interpret_response(&response),
      Err(LoadError::Status(503))
    );
  }

  #[test]
  fn newer_load_supersedes_older() {
    let mut seq = LoadSequence::new();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
    assert_eq!(second.value(), 2);
  }

  #[test]
  fn accept_drops_outcomes_of_old_tickets() {
    let mut seq = LoadSequence::new();
    let first = seq.begin();
    let second = seq.begin();
    assert_eq!(
      seq.accept(
        first,
        Err(LoadError::Status(500))
      ),
      None
    );
    assert_eq!(
      seq.accept(
        second,
        Err(LoadError::Status(404))
      ),
      Some(Err(LoadError::Status(404)))
    );
  }
}
