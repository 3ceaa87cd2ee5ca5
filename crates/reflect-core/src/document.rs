use serde::de::DeserializeOwned;
use serde::{
  Deserialize,
  Deserializer,
  Serialize
};
use serde_json::Value;

use crate::error::LoadError;

pub const FALLBACK_EMOJI: &str = "🤔";
pub const FALLBACK_SUMMARY: &str =
  "No summary available for this day.";
pub const FALLBACK_GRATITUDE: &str =
  "No gratitude points recorded.";
pub const FALLBACK_TERMS: &str =
  "No new terms learned.";
pub const FALLBACK_LITTLE_THINGS: &str =
  "No little things noted.";
pub const FALLBACK_MENTOR_ADVICE: &str =
  "No advice today. Keep going!";
pub const FALLBACK_TASKS: &str =
  "No tasks for this day.";

const FAILURE_EMOJI: &str = "⚠️";
const FAILURE_SUMMARY: &str =
  "AI Processing Failed";

/// Reflection payload as returned by the remote API. Every field is
/// optional; malformed fields and list entries are dropped instead of
/// failing the whole document.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct ReflectionDocument {
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub daily_emoji:      Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub summary:          Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient_list"
  )]
  pub gratitude_points: Vec<String>,
  #[serde(
    default,
    deserialize_with = "lenient_list"
  )]
  pub learned_terms:
    Vec<LearnedTerm>,
  #[serde(
    default,
    deserialize_with = "lenient_list"
  )]
  pub little_things:
    Vec<LittleThing>,
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub mentor_advice:    Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient_list"
  )]
  pub action_items:     Vec<String>
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct LearnedTerm {
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub term:       Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub definition: Option<String>
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct LittleThing {
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub mention:          Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient"
  )]
  pub suggested_action: Option<String>
}

impl ReflectionDocument {
  #[must_use]
  pub fn emoji(&self) -> &str {
    non_blank(self.daily_emoji.as_deref())
      .unwrap_or(FALLBACK_EMOJI)
  }

  #[must_use]
  pub fn summary_text(&self) -> &str {
    non_blank(self.summary.as_deref())
      .unwrap_or(FALLBACK_SUMMARY)
  }

  #[must_use]
  pub fn mentor_advice_text(
    &self
  ) -> &str {
    non_blank(
      self.mentor_advice.as_deref()
    )
    .unwrap_or(FALLBACK_MENTOR_ADVICE)
  }

  /// The processor answers with a fixed placeholder document when
  /// summarization fails upstream.
  #[must_use]
  pub fn is_processing_failure(
    &self
  ) -> bool {
    self.daily_emoji.as_deref()
      == Some(FAILURE_EMOJI)
      && self.summary.as_deref()
        == Some(FAILURE_SUMMARY)
  }
}

/// Parses a response body, accepting only a JSON object at the top.
pub fn parse_document(
  body: &str
) -> Result<ReflectionDocument, LoadError>
{
  let value: Value =
    serde_json::from_str(body)
      .map_err(|error| {
        tracing::debug!(%error, "reflection body is not JSON");
        LoadError::InvalidData
      })?;

  if !value.is_object() {
    tracing::debug!(
      kind = value_kind(&value),
      "reflection body is not an object"
    );
    return Err(LoadError::InvalidData);
  }

  ReflectionDocument::deserialize(value)
    .map_err(|error| {
      tracing::warn!(%error, "reflection object failed to decode");
      LoadError::InvalidData
    })
}

/// `None` for absent, empty or whitespace-only text.
#[must_use]
pub fn non_blank(
  raw: Option<&str>
) -> Option<&str> {
  raw.filter(|text| {
    !text.trim().is_empty()
  })
}

fn value_kind(
  value: &Value
) -> &'static str {
  match value {
    | Value::Null => "null",
    | Value::Bool(_) => "bool",
    | Value::Number(_) => "number",
    | Value::String(_) => "string",
    | Value::Array(_) => "array",
    | Value::Object(_) => "object"
  }
}

fn lenient<'de, D, T>(
  deserializer: D
) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned
{
  let value =
    Value::deserialize(deserializer)?;
  Ok(T::deserialize(value).ok())
}

fn lenient_list<'de, D, T>(
  deserializer: D
) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned
{
  let value =
    Value::deserialize(deserializer)?;
  let Value::Array(items) = value else {
    return Ok(Vec::new());
  };
  Ok(
    items
      .into_iter()
      .filter_map(|item| {
        T::deserialize(item).ok()
      })
      .collect()
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_fall_back() {
    let doc = parse_document("{}")
      .expect("empty object is valid");
    assert_eq!(doc.emoji(), FALLBACK_EMOJI);
    assert_eq!(
      doc.summary_text(),
      FALLBACK_SUMMARY
    );
    assert_eq!(
      doc.mentor_advice_text(),
      FALLBACK_MENTOR_ADVICE
    );
    assert!(doc.action_items.is_empty());
  }

  #[test]
  fn nulls_and_wrong_shapes_are_dropped()
  {
    let doc = parse_document(
      r#"{
        "summary": null,
        "gratitude_points": "not a list",
        "action_items": ["Ship it", null, 4],
        "learned_terms": [{"term": "OKR"}, 7]
      }"#
    )
    .expect("object should parse");

    assert_eq!(doc.summary, None);
    assert!(doc.gratitude_points.is_empty());
    assert_eq!(doc.action_items, vec![
      "Ship it".to_string()
    ]);
    assert_eq!(doc.learned_terms.len(), 1);
    assert_eq!(
      doc.learned_terms[0].definition,
      None
    );
  }

  #[test]
  fn non_object_bodies_are_invalid_data()
  {
    for body in [
      "[]",
      "\"text\"",
      "42",
      "null",
      "not json"
    ] {
      assert_eq!(
        parse_document(body),
        Err(LoadError::InvalidData),
        "body {body:?}"
      );
    }
  }

  #[test]
  fn detects_processing_failure_document(
  ) {
    let doc = parse_document(
      r#"{"daily_emoji":"⚠️","summary":"AI Processing Failed"}"#
    )
    .expect("object should parse");
    assert!(doc.is_processing_failure());
    assert!(
      !ReflectionDocument::default()
        .is_processing_failure()
    );
  }
}
