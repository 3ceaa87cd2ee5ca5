use chrono::{
  Datelike,
  Local,
  NaiveDate
};

use crate::error::LoadError;

/// Today's date in the local timezone of the running process (the
/// browser's timezone under wasm).
#[must_use]
pub fn today_local() -> NaiveDate {
  Local::now().date_naive()
}

/// `YYYY-MM-DD` built from the calendar fields of `date`. No timezone
/// conversion happens here, so a late-evening pick never becomes the
/// next day.
#[must_use]
pub fn format_local_date(
  date: NaiveDate
) -> String {
  format!(
    "{:04}-{:02}-{:02}",
    date.year(),
    date.month(),
    date.day()
  )
}

/// Strict `YYYY-MM-DD` parser used for date overrides.
pub fn parse_local_date(
  raw: &str
) -> Result<NaiveDate, LoadError> {
  let trimmed = raw.trim();
  let well_formed = trimmed.len() == 10
    && trimmed
      .bytes()
      .enumerate()
      .all(|(idx, byte)| match idx {
        | 4 | 7 => byte == b'-',
        | _ => byte.is_ascii_digit()
      });
  if !well_formed {
    return Err(LoadError::InvalidDate(
      raw.to_string()
    ));
  }

  NaiveDate::parse_from_str(
    trimmed, "%Y-%m-%d"
  )
  .map_err(|_| {
    LoadError::InvalidDate(
      raw.to_string()
    )
  })
}

/// Resolves the date a load should target: the override when given,
/// otherwise `today`.
pub fn resolve_target_date(
  date_override: Option<&str>,
  today: NaiveDate
) -> Result<NaiveDate, LoadError> {
  match date_override
    .map(str::trim)
    .filter(|raw| !raw.is_empty())
  {
    | Some(raw) => parse_local_date(raw),
    | None => Ok(today)
  }
}
