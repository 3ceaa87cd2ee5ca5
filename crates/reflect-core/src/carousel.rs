use serde::Serialize;

use crate::slides::SlideKind;

/// Slide the "back" control on the task slide returns to.
pub const BACK_TARGET_SLIDE: u32 =
  SlideKind::MentorAdvice as u32;

/// Options object handed to the swipe widget's constructor.
#[derive(
  Debug, Clone, PartialEq, Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
  pub direction:  &'static str,
  #[serde(rename = "loop")]
  pub looping:    bool,
  pub pagination: PaginationOptions,
  pub keyboard:   KeyboardOptions,
  pub mousewheel: bool
}

#[derive(
  Debug, Clone, PartialEq, Serialize,
)]
pub struct PaginationOptions {
  pub el:        &'static str,
  pub clickable: bool
}

#[derive(
  Debug, Clone, PartialEq, Serialize,
)]
pub struct KeyboardOptions {
  pub enabled: bool
}

impl Default for CarouselOptions {
  fn default() -> Self {
    Self {
      direction:  "vertical",
      looping:    false,
      pagination: PaginationOptions {
        el:        ".swiper-pagination",
        clickable: true
      },
      keyboard:   KeyboardOptions {
        enabled: true
      },
      mousewheel: true
    }
  }
}

/// Clamps a requested slide to the slides that exist.
#[must_use]
pub fn clamp_slide(
  index: u32,
  slide_count: usize
) -> u32 {
  let last = u32::try_from(
    slide_count.saturating_sub(1)
  )
  .unwrap_or(u32::MAX);
  index.min(last)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn options_serialize_to_widget_shape() {
    let json = serde_json::to_value(
      CarouselOptions::default()
    )
    .expect("serialize options");
    assert_eq!(
      json,
      serde_json::json!({
        "direction": "vertical",
        "loop": false,
        "pagination": {
          "el": ".swiper-pagination",
          "clickable": true
        },
        "keyboard": { "enabled": true },
        "mousewheel": true
      })
    );
  }

  #[test]
  fn back_target_is_mentor_slide() {
    assert_eq!(BACK_TARGET_SLIDE, 4);
    assert_eq!(clamp_slide(9, 6), 5);
    assert_eq!(clamp_slide(4, 6), 4);
    assert_eq!(clamp_slide(3, 0), 0);
  }
}
