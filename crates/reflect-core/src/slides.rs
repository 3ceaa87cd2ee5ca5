use std::fmt::Write as _;

use crate::document::{
  FALLBACK_GRATITUDE,
  FALLBACK_LITTLE_THINGS,
  FALLBACK_TERMS,
  ReflectionDocument,
  non_blank
};
use crate::escape::escape_html;

/// Story order. The discriminant is the carousel index.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum SlideKind {
  Mood = 0,
  Gratitude = 1,
  Knowledge = 2,
  LittleThings = 3,
  MentorAdvice = 4,
  TaskReview = 5
}

impl SlideKind {
  pub const ALL: [SlideKind; 6] = [
    SlideKind::Mood,
    SlideKind::Gratitude,
    SlideKind::Knowledge,
    SlideKind::LittleThings,
    SlideKind::MentorAdvice,
    SlideKind::TaskReview
  ];

  #[must_use]
  pub fn index(self) -> u32 {
    self as u32
  }

  #[must_use]
  pub fn title(self) -> &'static str {
    match self {
      | Self::Mood => "Daily Reflection",
      | Self::Gratitude => "Gratitude",
      | Self::Knowledge => "Knowledge",
      | Self::LittleThings => {
        "Little Things"
      }
      | Self::MentorAdvice => {
        "Mentor Advice"
      }
      | Self::TaskReview => "Tasks"
    }
  }

  #[must_use]
  pub fn css_class(self) -> &'static str {
    match self {
      | Self::Mood => "slide-mood",
      | Self::Gratitude => {
        "slide-gratitude"
      }
      | Self::Knowledge => {
        "slide-knowledge"
      }
      | Self::LittleThings => {
        "slide-little-things"
      }
      | Self::MentorAdvice => {
        "slide-mentor"
      }
      | Self::TaskReview => "slide-tasks"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
  pub kind:   SlideKind,
  /// Inner markup of the slide. Every piece of remote text in here
  /// has been escaped.
  pub markup: String
}

/// Builds the six story slides for `doc`, loaded for `date`.
#[must_use]
pub fn build_slides(
  doc: &ReflectionDocument,
  date: &str
) -> Vec<Slide> {
  SlideKind::ALL
    .into_iter()
    .map(|kind| {
      let markup = match kind {
        | SlideKind::Mood => {
          mood_markup(doc, date)
        }
        | SlideKind::Gratitude => {
          gratitude_markup(doc)
        }
        | SlideKind::Knowledge => {
          knowledge_markup(doc)
        }
        | SlideKind::LittleThings => {
          little_things_markup(doc)
        }
        | SlideKind::MentorAdvice => {
          mentor_markup(doc)
        }
        | SlideKind::TaskReview => {
          task_review_markup()
        }
      };
      Slide { kind, markup }
    })
    .collect()
}

fn heading(kind: SlideKind) -> String {
  format!("<h1>{}</h1>", kind.title())
}

fn mood_markup(
  doc: &ReflectionDocument,
  date: &str
) -> String {
  format!(
    "<div class=\"daily-emoji\">{}</div>\
     {}<p class=\"reflection-date\">{}</p>\
     <p class=\"summary\">{}</p>",
    escape_html(doc.emoji()),
    heading(SlideKind::Mood),
    escape_html(date),
    escape_html(doc.summary_text())
  )
}

fn gratitude_markup(
  doc: &ReflectionDocument
) -> String {
  let items = doc
    .gratitude_points
    .iter()
    .filter_map(|point| {
      non_blank(Some(point.as_str()))
    })
    .map(|point| {
      format!(
        "<li>{}</li>",
        escape_html(point)
      )
    })
    .collect::<Vec<_>>();

  list_or_fallback(
    SlideKind::Gratitude,
    "gratitude-list",
    &items,
    FALLBACK_GRATITUDE
  )
}

fn knowledge_markup(
  doc: &ReflectionDocument
) -> String {
  let items = doc
    .learned_terms
    .iter()
    .filter_map(|entry| {
      let term =
        non_blank(entry.term.as_deref())?;
      let definition = non_blank(
        entry.definition.as_deref()
      )
      .unwrap_or("");
      Some(format!(
        "<li><strong>{}</strong>: {}</li>",
        escape_html(term),
        escape_html(definition)
      ))
    })
    .collect::<Vec<_>>();

  list_or_fallback(
    SlideKind::Knowledge,
    "terms-list",
    &items,
    FALLBACK_TERMS
  )
}

fn little_things_markup(
  doc: &ReflectionDocument
) -> String {
  let items = doc
    .little_things
    .iter()
    .filter_map(|thing| {
      let mention =
        non_blank(thing.mention.as_deref());
      let action = non_blank(
        thing.suggested_action.as_deref()
      );
      if mention.is_none() && action.is_none()
      {
        return None;
      }
      let mut item = format!(
        "<li><span class=\"mention\">{}</span>",
        escape_html(mention.unwrap_or(""))
      );
      if let Some(action) = action {
        let _ = write!(
          item,
          "<span class=\"suggested-action\">\
           → {}</span>",
          escape_html(action)
        );
      }
      item.push_str("</li>");
      Some(item)
    })
    .collect::<Vec<_>>();

  list_or_fallback(
    SlideKind::LittleThings,
    "little-things-list",
    &items,
    FALLBACK_LITTLE_THINGS
  )
}

fn mentor_markup(
  doc: &ReflectionDocument
) -> String {
  format!(
    "{}<blockquote class=\"mentor-advice\">\
     {}</blockquote>",
    heading(SlideKind::MentorAdvice),
    escape_html(doc.mentor_advice_text())
  )
}

fn task_review_markup() -> String {
  format!(
    "{}<p class=\"task-hint\">Uncheck \
     anything you do not want to \
     copy.</p>",
    heading(SlideKind::TaskReview)
  )
}

fn list_or_fallback(
  kind: SlideKind,
  list_class: &str,
  items: &[String],
  fallback: &str
) -> String {
  if items.is_empty() {
    return format!(
      "{}<p class=\"placeholder\">{}</p>",
      heading(kind),
      escape_html(fallback)
    );
  }
  format!(
    "{}<ul class=\"{list_class}\">{}</ul>",
    heading(kind),
    items.concat()
  )
}
