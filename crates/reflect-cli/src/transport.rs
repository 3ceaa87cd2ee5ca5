use std::time::Duration;

use anyhow::Context;
use reflect_core::LoadError;
use reflect_core::loader::{
  RawResponse,
  ReflectionTransport
};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// `reqwest`-backed transport for the reflection API.
pub struct HttpTransport {
  client: reqwest::Client
}

impl HttpTransport {
  pub fn new() -> anyhow::Result<Self> {
    let client =
      reqwest::Client::builder()
        .timeout(Duration::from_secs(
          REQUEST_TIMEOUT_SECS
        ))
        .user_agent(concat!(
          "reflect/",
          env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context(
          "failed building HTTP client \
           for the reflection API"
        )?;
    Ok(Self { client })
  }
}

impl ReflectionTransport for HttpTransport {
  async fn get(
    &self,
    url: &str
  ) -> Result<RawResponse, LoadError> {
    let response = self
      .client
      .get(url)
      .header(
        reqwest::header::ACCEPT,
        "application/json"
      )
      .send()
      .await
      .map_err(|error| {
        tracing::error!(%error, "reflection request failed");
        LoadError::Network(
          error.to_string()
        )
      })?;

    let status =
      response.status().as_u16();
    let body =
      response.text().await.map_err(
        |error| {
          LoadError::Network(format!(
            "failed reading response \
             body: {error}"
          ))
        }
      )?;
    tracing::debug!(
      status,
      bytes = body.len(),
      "reflection response received"
    );
    Ok(RawResponse { status, body })
  }
}
