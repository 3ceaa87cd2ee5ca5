use gloo::net::http::Request;
use reflect_core::LoadError;
use reflect_core::loader::{
  RawResponse,
  ReflectionTransport
};

/// Browser `fetch` transport for the reflection API.
pub struct FetchTransport;

impl ReflectionTransport for FetchTransport {
  async fn get(
    &self,
    url: &str
  ) -> Result<RawResponse, LoadError> {
    let response = Request::get(url)
      .header("Accept", "application/json")
      .send()
      .await
      .map_err(|e| {
        LoadError::Network(format!(
          "fetch error: {e}"
        ))
      })?;

    let status = response.status();
    let body =
      response.text().await.map_err(|e| {
        LoadError::Network(format!(
          "decode error: {e}"
        ))
      })?;

    Ok(RawResponse { status, body })
  }
}
