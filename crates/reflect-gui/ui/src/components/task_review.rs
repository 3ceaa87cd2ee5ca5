use reflect_core::document::FALLBACK_TASKS;
use reflect_core::tasks::{
  Task,
  TaskSource
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskReviewProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<(String, bool)>
}

#[function_component(TaskReview)]
pub fn task_review(
  props: &TaskReviewProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div id="task-list-container" class="task-list empty">
            <p class="placeholder">{ FALLBACK_TASKS }</p>
        </div>
    };
  }

  html! {
      <div id="task-list-container" class="task-list">
          {
              for props.tasks.iter().map(|task| html! {
                  <TaskRow
                      task={task.clone()}
                      on_toggle={props.on_toggle.clone()}
                  />
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct TaskRowProps {
  task:      Task,
  on_toggle: Callback<(String, bool)>
}

#[function_component(TaskRow)]
fn task_row(props: &TaskRowProps) -> Html {
  let task = &props.task;
  let input_id =
    format!("task-{}", task.id);
  let onchange = {
    let id = task.id.clone();
    let on_toggle =
      props.on_toggle.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_toggle
        .emit((id.clone(), input.checked()));
    })
  };

  let mention = match (
    task.source,
    task.mention.as_deref()
  ) {
    | (TaskSource::Suggested, Some(mention)) => {
      html! {
          <span class="task-mention">{ format!("From: {mention}") }</span>
      }
    }
    | _ => html! {}
  };

  html! {
      <div class={classes!("task-item", task.source.as_key(), task.checked.then_some("checked"))}>
          <input
              type="checkbox"
              id={input_id.clone()}
              data-task-id={task.id.clone()}
              checked={task.checked}
              {onchange}
          />
          <label for={input_id}>
              <span class="task-text">{ &task.text }</span>
              { mention }
          </label>
      </div>
  }
}
