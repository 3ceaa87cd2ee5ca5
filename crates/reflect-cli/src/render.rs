use std::fmt::Write as _;

use chrono::{
  Datelike,
  NaiveDate
};
use reflect_core::LoadedReflection;
use reflect_core::calendar::{
  CalendarPicker,
  weekday_labels
};
use reflect_core::document::{
  FALLBACK_GRATITUDE,
  FALLBACK_LITTLE_THINGS,
  FALLBACK_TASKS,
  FALLBACK_TERMS,
  non_blank
};
use reflect_core::slides::SlideKind;
use reflect_core::tasks::TaskSource;
use unicode_width::UnicodeWidthStr;

fn section(
  out: &mut String,
  title: &str
) {
  let _ = writeln!(out, "\n{title}");
  let _ = writeln!(
    out,
    "{}",
    "=".repeat(title.width())
  );
}

fn bullets<I>(
  out: &mut String,
  items: I,
  fallback: &str
) where
  I: IntoIterator<Item = String>
{
  let mut any = false;
  for item in items {
    any = true;
    let _ = writeln!(out, "  • {item}");
  }
  if !any {
    let _ = writeln!(out, "  {fallback}");
  }
}

/// Plain-text rendition of the six story slides.
pub fn render_reflection(
  loaded: &LoadedReflection
) -> String {
  let doc = &loaded.document;
  let mut out = String::new();

  section(
    &mut out,
    &format!(
      "{} {} · {}",
      doc.emoji(),
      SlideKind::Mood.title(),
      loaded.date
    )
  );
  let _ =
    writeln!(out, "{}", doc.summary_text());

  section(
    &mut out,
    SlideKind::Gratitude.title()
  );
  bullets(
    &mut out,
    doc
      .gratitude_points
      .iter()
      .filter(|p| !p.trim().is_empty())
      .cloned(),
    FALLBACK_GRATITUDE
  );

  section(
    &mut out,
    SlideKind::Knowledge.title()
  );
  bullets(
    &mut out,
    doc.learned_terms.iter().filter_map(
      |entry| {
        let term = entry
          .term
          .as_deref()
          .filter(|t| !t.trim().is_empty())?;
        Some(match entry.definition.as_deref()
        {
          | Some(definition) => {
            format!("{term}: {definition}")
          }
          | None => term.to_string()
        })
      }
    ),
    FALLBACK_TERMS
  );

  section(
    &mut out,
    SlideKind::LittleThings.title()
  );
  bullets(
    &mut out,
    doc.little_things.iter().filter_map(
      |thing| {
        let mention = non_blank(
          thing.mention.as_deref()
        );
        let action = non_blank(
          thing.suggested_action.as_deref()
        );
        match (mention, action) {
          | (Some(mention), Some(action)) => {
            Some(format!(
              "{mention} → {action}"
            ))
          }
          | (Some(mention), None) => {
            Some(mention.to_string())
          }
          | (None, Some(action)) => {
            Some(format!("→ {action}"))
          }
          | (None, None) => None
        }
      }
    ),
    FALLBACK_LITTLE_THINGS
  );

  section(
    &mut out,
    SlideKind::MentorAdvice.title()
  );
  let _ = writeln!(
    out,
    "  “{}”",
    doc.mentor_advice_text()
  );

  section(
    &mut out,
    SlideKind::TaskReview.title()
  );
  bullets(
    &mut out,
    loaded.tasks.tasks().iter().map(
      |task| {
        let mark =
          if task.checked { "x" } else { " " };
        match (task.source, &task.mention) {
          | (
            TaskSource::Suggested,
            Some(mention)
          ) => format!(
            "[{mark}] {} ({}) — from: {mention}",
            task.text, task.id
          ),
          | _ => format!(
            "[{mark}] {} ({})",
            task.text, task.id
          )
        }
      }
    ),
    FALLBACK_TASKS
  );

  out
}

/// Month grid with `*` on today and brackets on the selected day.
/// Filler days from adjacent months are dimmed with parentheses.
pub fn render_calendar(
  picker: &CalendarPicker,
  today: NaiveDate
) -> String {
  let mut out = String::new();
  let label = picker.month_label();
  let _ = writeln!(out, "{label:^35}");
  for name in
    weekday_labels(picker.week_start())
  {
    let _ = write!(out, " {name:<4}");
  }
  out.push('\n');

  for week in picker.grid(today).chunks(7) {
    for cell in week {
      let day = cell.date.day();
      let text = if cell.is_selected {
        format!("[{day:>2}]")
      } else if !cell.in_month {
        format!("({day:>2})")
      } else {
        format!(" {day:>2} ")
      };
      let marker =
        if cell.is_today { '*' } else { ' ' };
      let _ = write!(out, "{text}{marker}");
    }
    out.push('\n');
  }
  out
}

#[cfg(test)]
mod tests {
  use chrono::Weekday;
  use reflect_core::document::parse_document;

  use super::*;

  #[test]
  fn reflection_text_lists_tasks_with_ids() {
    let doc = parse_document(
      r#"{"action_items":["Deploy webhook"],"little_things":[{"mention":"Wanted coffee","suggested_action":"Make coffee"}]}"#
    )
    .expect("valid document");
    let loaded =
      LoadedReflection::from_document(
        "2026-10-17".to_string(),
        doc
      );
    let text = render_reflection(&loaded);
    assert!(text.contains(
      "[x] Deploy webhook (direct-0)"
    ));
    assert!(text.contains(
      "[x] Make coffee (suggested-0) — from: Wanted coffee"
    ));
    assert!(text.contains(FALLBACK_GRATITUDE));
  }

  #[test]
  fn little_thing_without_mention_keeps_its_action() {
    let doc = parse_document(
      r#"{"little_things":[{"suggested_action":"Make coffee"}]}"#
    )
    .expect("valid document");
    let loaded =
      LoadedReflection::from_document(
        "2026-10-17".to_string(),
        doc
      );
    let text = render_reflection(&loaded);
    assert!(text.contains("→ Make coffee"));
    assert!(!text.contains(FALLBACK_LITTLE_THINGS));
  }

  #[test]
  fn calendar_text_has_whole_weeks() {
    let today =
      NaiveDate::from_ymd_opt(2026, 10, 17)
        .expect("valid date");
    let picker =
      CalendarPicker::new(today, Weekday::Sun);
    let text = render_calendar(&picker, today);
    let lines = text.lines().collect::<Vec<_>>();
    assert!(lines[0].contains("October 2026"));
    // header + weekday row + five weeks
    assert_eq!(lines.len(), 7);
    assert!(text.contains("[17]*"));
    assert!(text.contains("(27)"));
  }
}
