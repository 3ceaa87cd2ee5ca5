use std::rc::Rc;

use chrono::{
  NaiveDate,
  Weekday
};
use reflect_core::calendar::CalendarPicker;
use reflect_core::slides::Slide;
use reflect_core::tasks::TaskAggregator;
use reflect_core::transition::{
  Transition,
  TransitionStep
};
use yew::Reducible;

/// What the page shows in place of the carousel.
#[derive(Clone, PartialEq)]
pub enum LoadStatus {
  Loading,
  Failed(String),
  Ready {
    date:   String,
    slides: Vec<Slide>,
    /// Bumped for every rendered load so the carousel re-binds.
    generation: u64
  }
}

impl LoadStatus {
  pub fn indicator_text(
    &self
  ) -> Option<String> {
    match self {
      | Self::Loading => {
        Some("Loading reflection...".to_string())
      }
      | Self::Failed(message) => {
        Some(message.clone())
      }
      | Self::Ready { .. } => None
    }
  }
}

#[derive(Clone, PartialEq, Default)]
pub struct TaskState {
  pub aggregator: TaskAggregator
}

pub enum TaskAction {
  Replace(TaskAggregator),
  Toggle {
    id:      String,
    checked: bool
  }
}

impl Reducible for TaskState {
  type Action = TaskAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | TaskAction::Replace(aggregator) => {
        next.aggregator = aggregator;
      }
      | TaskAction::Toggle { id, checked } => {
        next.aggregator.toggle(&id, checked);
      }
    }
    Rc::new(next)
  }
}

#[derive(Clone, PartialEq)]
pub struct PickerState {
  pub picker: CalendarPicker
}

impl PickerState {
  pub fn new(
    today: NaiveDate,
    week_start: Weekday
  ) -> Self {
    Self {
      picker: CalendarPicker::new(
        today, week_start
      )
    }
  }
}

pub enum PickerAction {
  Open(NaiveDate),
  Navigate(i32),
  Select(NaiveDate),
  Close
}

impl Reducible for PickerState {
  type Action = PickerAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | PickerAction::Open(today) => {
        next.picker.open(today);
      }
      | PickerAction::Navigate(delta) => {
        next.picker.navigate_month(delta);
      }
      | PickerAction::Select(date) => {
        next.picker.select_day(date);
      }
      | PickerAction::Close => {
        next.picker.close();
      }
    }
    Rc::new(next)
  }
}

#[derive(
  Clone, Copy, PartialEq, Default,
)]
pub struct OverlayState {
  pub phase: Transition
}

pub enum OverlayAction {
  Show,
  Hide(u32),
  Settle(Transition)
}

impl OverlayState {
  /// Step the driver has to schedule after `action` is applied to
  /// the current phase.
  pub fn step_for(
    &self,
    action: &OverlayAction
  ) -> TransitionStep {
    match action {
      | OverlayAction::Show => {
        self.phase.show().1
      }
      | OverlayAction::Hide(fade_ms) => {
        self.phase.hide(*fade_ms).1
      }
      | OverlayAction::Settle(_) => {
        TransitionStep::Done
      }
    }
  }
}

impl Reducible for OverlayState {
  type Action = OverlayAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let phase = match action {
      | OverlayAction::Show => {
        self.phase.show().0
      }
      | OverlayAction::Hide(fade_ms) => {
        self.phase.hide(fade_ms).0
      }
      | OverlayAction::Settle(target) => {
        self.phase.settle(target)
      }
    };
    if phase == self.phase {
      return self;
    }
    Rc::new(Self { phase })
  }
}
