/// Duration of the overlay fade, matching the stylesheet's
/// `transition: opacity` value.
pub const FADE_DURATION_MS: u32 = 300;

/// Two-phase visibility of an overlay. Showing goes
/// `Hidden -> Mounted -> Visible` (mount first, add the visible class on
/// the next tick so the fade runs); hiding goes
/// `Visible -> Leaving -> Hidden` after the fade duration.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum Transition {
  #[default]
  Hidden,
  Mounted,
  Visible,
  Leaving
}

/// Next step a driver has to schedule after a phase change.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TransitionStep {
  /// Apply the next phase on the following tick.
  NextTick(Transition),
  /// Apply the next phase after the given delay.
  After(u32, Transition),
  Done
}

impl Transition {
  #[must_use]
  pub fn is_mounted(self) -> bool {
    !matches!(self, Self::Hidden)
  }

  #[must_use]
  pub fn has_visible_class(
    self
  ) -> bool {
    matches!(self, Self::Visible)
  }

  /// Phase entered when a show is requested, and what to schedule
  /// next.
  #[must_use]
  pub fn show(
    self
  ) -> (Self, TransitionStep) {
    match self {
      | Self::Visible => {
        (Self::Visible, TransitionStep::Done)
      }
      | _ => (
        Self::Mounted,
        TransitionStep::NextTick(
          Self::Visible
        )
      )
    }
  }

  #[must_use]
  pub fn hide(
    self,
    fade_ms: u32
  ) -> (Self, TransitionStep) {
    match self {
      | Self::Hidden => {
        (Self::Hidden, TransitionStep::Done)
      }
      | _ => (
        Self::Leaving,
        TransitionStep::After(
          fade_ms,
          Self::Hidden
        )
      )
    }
  }

  /// Applies a scheduled phase unless a newer request has already
  /// moved the overlay somewhere incompatible.
  #[must_use]
  pub fn settle(
    self,
    target: Self
  ) -> Self {
    match (self, target) {
      | (Self::Mounted, Self::Visible) => {
        Self::Visible
      }
      | (Self::Leaving, Self::Hidden) => {
        Self::Hidden
      }
      | (current, _) => current
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn show_mounts_then_reveals() {
    let (phase, step) =
      Transition::Hidden.show();
    assert_eq!(phase, Transition::Mounted);
    assert!(phase.is_mounted());
    assert!(!phase.has_visible_class());
    assert_eq!(
      step,
      TransitionStep::NextTick(
        Transition::Visible
      )
    );
    assert_eq!(
      phase.settle(Transition::Visible),
      Transition::Visible
    );
  }

  #[test]
  fn hide_waits_for_fade() {
    let (phase, step) = Transition::Visible
      .hide(FADE_DURATION_MS);
    assert_eq!(phase, Transition::Leaving);
    assert!(phase.is_mounted());
    assert_eq!(
      step,
      TransitionStep::After(
        FADE_DURATION_MS,
        Transition::Hidden
      )
    );
  }

  #[test]
  fn stale_hide_does_not_unmount_reopened_overlay(
  ) {
    let (leaving, _) =
      Transition::Visible.hide(300);
    let (reopened, _) = leaving.show();
    let reopened =
      reopened.settle(Transition::Visible);
    assert_eq!(
      reopened.settle(Transition::Hidden),
      Transition::Visible
    );
  }
}
