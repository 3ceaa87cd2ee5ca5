use serde::{
  Deserialize,
  Serialize
};

use crate::document::{
  LittleThing,
  non_blank
};
use crate::error::CopyError;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
  Direct,
  Suggested
}

impl TaskSource {
  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Direct => "direct",
      | Self::Suggested => "suggested"
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Task {
  pub id:      String,
  pub text:    String,
  pub source:  TaskSource,
  pub mention: Option<String>,
  pub checked: bool
}

impl Task {
  fn new(
    source: TaskSource,
    index: usize,
    text: &str,
    mention: Option<&str>
  ) -> Self {
    Self {
      id: task_id(source, index),
      text: text.trim().to_string(),
      source,
      mention: non_blank(mention)
        .map(|m| m.trim().to_string()),
      checked: true
    }
  }
}

/// Id of the task at `index` within its source list. Stable for one
/// load; a new load rebuilds every id.
#[must_use]
pub fn task_id(
  source: TaskSource,
  index: usize
) -> String {
  format!("{}-{index}", source.as_key())
}

/// Owns the toggle-able task list derived from one reflection.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskAggregator {
  tasks: Vec<Task>
}

impl TaskAggregator {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces the list with direct items followed by suggested
  /// actions. Blank entries are skipped without shifting the ids of
  /// the entries after them.
  pub fn build(
    &mut self,
    action_items: &[String],
    little_things: &[LittleThing]
  ) -> &[Task] {
    let direct = action_items
      .iter()
      .enumerate()
      .filter_map(|(index, item)| {
        non_blank(Some(item.as_str())).map(
          |text| {
            Task::new(
              TaskSource::Direct,
              index,
              text,
              None
            )
          }
        )
      });

    let suggested = little_things
      .iter()
      .enumerate()
      .filter_map(|(index, thing)| {
        non_blank(
          thing
            .suggested_action
            .as_deref()
        )
        .map(|text| {
          Task::new(
            TaskSource::Suggested,
            index,
            text,
            thing.mention.as_deref()
          )
        })
      });

    self.tasks =
      direct.chain(suggested).collect();
    tracing::debug!(
      task_count = self.tasks.len(),
      "rebuilt task list"
    );
    &self.tasks
  }

  #[must_use]
  pub fn from_parts(
    action_items: &[String],
    little_things: &[LittleThing]
  ) -> Self {
    let mut aggregator = Self::new();
    aggregator
      .build(action_items, little_things);
    aggregator
  }

  #[must_use]
  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  #[must_use]
  pub fn get(
    &self,
    id: &str
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  /// Sets `checked` on the task with the given id. Returns `false` when
  /// no task has that id.
  pub fn toggle(
    &mut self,
    id: &str,
    checked: bool
  ) -> bool {
    match self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    {
      | Some(task) => {
        task.checked = checked;
        tracing::trace!(id, checked, "toggled task");
        true
      }
      | None => {
        tracing::warn!(id, "toggle for unknown task id");
        false
      }
    }
  }

  pub fn checked_tasks(
    &self
  ) -> impl Iterator<Item = &Task> {
    self
      .tasks
      .iter()
      .filter(|task| task.checked)
  }

  #[must_use]
  pub fn checked_count(&self) -> usize {
    self.checked_tasks().count()
  }

  /// Clipboard payload: one `- text` bullet per checked task.
  pub fn copy_text(
    &self
  ) -> Result<String, CopyError> {
    let lines = self
      .checked_tasks()
      .map(|task| {
        format!("- {}", task.text)
      })
      .collect::<Vec<_>>();
    if lines.is_empty() {
      return Err(
        CopyError::NothingSelected
      );
    }
    Ok(lines.join("\n"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn little(
    mention: &str,
    action: &str
  ) -> LittleThing {
    LittleThing {
      mention:          Some(
        mention.to_string()
      ),
      suggested_action: Some(
        action.to_string()
      )
    }
  }

  fn sample() -> TaskAggregator {
    TaskAggregator::from_parts(
      &[
        "Email Alex".to_string(),
        "Book dentist".to_string(),
      ],
      &[
        little("Wanted coffee", "Make coffee"),
        little("Out of milk", "Buy milk"),
        little("Sam likes donuts", "Bring donuts"),
      ]
    )
  }

  #[test]
  fn direct_items_come_first_and_all_start_checked(
  ) {
    let agg = sample();
    let ids = agg
      .tasks()
      .iter()
      .map(|task| task.id.as_str())
      .collect::<Vec<_>>();
    assert_eq!(ids, vec![
      "direct-0",
      "direct-1",
      "suggested-0",
      "suggested-1",
      "suggested-2"
    ]);
    assert!(
      agg.tasks().iter().all(|t| t.checked)
    );
    assert_eq!(
      agg.get("suggested-1")
        .and_then(|t| t.mention.as_deref()),
      Some("Out of milk")
    );
  }

  #[test]
  fn toggling_one_task_leaves_others_untouched(
  ) {
    let mut agg = sample();
    let before = agg.tasks().to_vec();

    assert!(agg.toggle("suggested-2", false));

    for (old, new) in
      before.iter().zip(agg.tasks())
    {
      if new.id == "suggested-2" {
        assert!(!new.checked);
      } else {
        assert_eq!(old, new);
      }
    }
  }

  #[test]
  fn unknown_toggle_is_ignored() {
    let mut agg = sample();
    assert!(!agg.toggle("direct-9", false));
    assert_eq!(agg.checked_count(), 5);
  }

  #[test]
  fn copy_with_nothing_checked_is_refused(
  ) {
    let mut agg = sample();
    let ids = agg
      .tasks()
      .iter()
      .map(|t| t.id.clone())
      .collect::<Vec<_>>();
    for id in &ids {
      agg.toggle(id, false);
    }
    assert_eq!(
      agg.copy_text(),
      Err(CopyError::NothingSelected)
    );
    assert_eq!(
      TaskAggregator::new().copy_text(),
      Err(CopyError::NothingSelected)
    );
  }

  #[test]
  fn copy_text_keeps_aggregation_order() {
    let mut agg = sample();
    agg.toggle("direct-1", false);
    agg.toggle("suggested-0", false);
    assert_eq!(
      agg.copy_text().as_deref(),
      Ok("- Email Alex\n- Buy milk\n- Bring donuts")
    );
  }

  #[test]
  fn rebuild_discards_previous_list() {
    let mut agg = sample();
    agg.toggle("direct-0", false);
    agg.build(
      &["Fresh start".to_string()],
      &[]
    );
    assert_eq!(agg.tasks().len(), 1);
    assert_eq!(agg.tasks()[0].id, "direct-0");
    assert!(agg.tasks()[0].checked);
  }

  #[test]
  fn blank_entries_keep_positional_ids() {
    let agg = TaskAggregator::from_parts(
      &[" ".to_string(), "Real".to_string()],
      &[
        LittleThing {
          mention:          Some(
            "Only a mention".to_string()
          ),
          suggested_action: None
        },
        little("Tired", "Sleep early"),
      ]
    );
    let ids = agg
      .tasks()
      .iter()
      .map(|t| t.id.as_str())
      .collect::<Vec<_>>();
    assert_eq!(ids, vec![
      "direct-1",
      "suggested-1"
    ]);
  }
}
