mod overlay;
mod state;

use chrono::NaiveDate;
use gloo::console::log;
use gloo::dialogs::alert;
use gloo::timers::future::TimeoutFuture;
use reflect_core::calendar::weekday_labels;
use reflect_core::carousel::BACK_TARGET_SLIDE;
use reflect_core::config::ReflectConfig;
use reflect_core::datetime::today_local;
use reflect_core::loader::LoadSequence;
use reflect_core::{
  ReflectionRequest,
  load_reflection
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer,
  use_state
};

use self::overlay::{
  drive_overlay,
  overlay_classes
};
use self::state::{
  LoadStatus,
  OverlayAction,
  OverlayState,
  PickerAction,
  PickerState,
  TaskAction,
  TaskState
};
use crate::api::FetchTransport;
use crate::carousel::SlideCarousel;
use crate::clipboard;
use crate::components::{
  CalendarOverlay,
  CopyConfirmation,
  LoadingIndicator,
  StorySlides
};

const REFLECT_CONFIG_TOML: &str =
  include_str!("../assets/reflect.toml");
const COPY_LABEL: &str =
  "Copy Selected Tasks";
const COPIED_LABEL: &str = "Copied!";

fn load_config() -> ReflectConfig {
  match ReflectConfig::from_toml_str(
    REFLECT_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        endpoint = %config.api.endpoint,
        week_start = %config.ui.week_start,
        "loaded reflect config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing reflect config; using defaults");
      ReflectConfig::default()
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_config);
  let status =
    use_state(|| LoadStatus::Loading);
  let tasks =
    use_reducer(TaskState::default);
  let picker = {
    let week_start = config.week_start();
    use_reducer(move || {
      PickerState::new(
        today_local(),
        week_start
      )
    })
  };
  let calendar_overlay =
    use_reducer(OverlayState::default);
  let copy_overlay =
    use_reducer(OverlayState::default);
  let copy_label = use_state(|| {
    COPY_LABEL.to_string()
  });
  let copied_count =
    use_state(|| 0_usize);
  let sequence =
    use_mut_ref(LoadSequence::new);
  let carousel =
    use_mut_ref(SlideCarousel::default);

  let load = {
    let config = config.clone();
    let status = status.clone();
    let tasks = tasks.clone();
    let sequence = sequence.clone();
    Callback::from(
      move |date_override: Option<String>| {
        let ticket =
          sequence.borrow_mut().begin();
        status.set(LoadStatus::Loading);

        let request =
          match ReflectionRequest::new(
            &config.api,
            date_override.as_deref(),
            today_local()
          ) {
            | Ok(request) => request,
            | Err(err) => {
              tracing::error!(error = %err, "could not build reflection request");
              status.set(LoadStatus::Failed(
                err.user_message()
              ));
              return;
            }
          };
        ui_debug(
          "load.begin",
          &format!(
            "ticket={} date={}",
            ticket.value(),
            request.date_string()
          )
        );

        let status = status.clone();
        let tasks = tasks.clone();
        let sequence = sequence.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let result = load_reflection(
              &FetchTransport,
              &request
            )
            .await;

            let Some(result) = sequence
              .borrow()
              .accept(ticket, result)
            else {
              return;
            };

            match result {
              | Ok(loaded) => {
                ui_debug(
                  "load.ok",
                  &format!(
                    "date={}",
                    loaded.date
                  )
                );
                tasks.dispatch(
                  TaskAction::Replace(
                    loaded.tasks
                  )
                );
                status.set(LoadStatus::Ready {
                  date:       loaded.date,
                  slides:     loaded.slides,
                  generation: ticket.value()
                });
              }
              | Err(err) => {
                tracing::error!(error = %err, "reflection load failed");
                status.set(LoadStatus::Failed(
                  err.user_message()
                ));
              }
            }
          }
        );
      }
    )
  };

  {
    let load = load.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "loading today's reflection"
      );
      load.emit(None);
      || ()
    });
  }

  {
    let carousel = carousel.clone();
    let ready = match &*status {
      | LoadStatus::Ready {
        generation,
        slides,
        ..
      } => Some((*generation, slides.len())),
      | _ => None
    };
    use_effect_with(ready, move |ready| {
      match ready {
        | Some((generation, slide_count)) => {
          tracing::debug!(
            generation,
            "slides mounted; binding carousel"
          );
          carousel
            .borrow_mut()
            .reinitialize(*slide_count);
        }
        | None => {
          carousel.borrow_mut().teardown();
        }
      }
      || ()
    });
  }

  let on_open_calendar = {
    let picker = picker.clone();
    let calendar_overlay =
      calendar_overlay.clone();
    Callback::from(move |_: MouseEvent| {
      picker.dispatch(PickerAction::Open(
        today_local()
      ));
      drive_overlay(
        &calendar_overlay,
        OverlayAction::Show
      );
    })
  };

  let close_calendar = {
    let picker = picker.clone();
    let calendar_overlay =
      calendar_overlay.clone();
    let fade_ms = config.ui.fade_ms;
    Callback::from(move |_: ()| {
      picker.dispatch(PickerAction::Close);
      drive_overlay(
        &calendar_overlay,
        OverlayAction::Hide(fade_ms)
      );
    })
  };

  let on_cancel_calendar = {
    let close_calendar =
      close_calendar.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "calendar.cancel",
        "closing without loading"
      );
      close_calendar.emit(());
    })
  };

  let on_confirm_calendar = {
    let picker = picker.clone();
    let load = load.clone();
    let close_calendar =
      close_calendar.clone();
    Callback::from(move |_: MouseEvent| {
      let mut pending = picker.picker;
      let date = pending.confirm();
      ui_debug(
        "calendar.confirm",
        &format!("date={date}")
      );
      load.emit(Some(date));
      close_calendar.emit(());
    })
  };

  let on_prev_month = {
    let picker = picker.clone();
    Callback::from(move |_: MouseEvent| {
      picker
        .dispatch(PickerAction::Navigate(-1));
    })
  };

  let on_next_month = {
    let picker = picker.clone();
    Callback::from(move |_: MouseEvent| {
      picker
        .dispatch(PickerAction::Navigate(1));
    })
  };

  let on_select_day = {
    let picker = picker.clone();
    Callback::from(move |date: NaiveDate| {
      picker
        .dispatch(PickerAction::Select(date));
    })
  };

  let on_toggle_task = {
    let tasks = tasks.clone();
    Callback::from(
      move |(id, checked): (String, bool)| {
        tasks.dispatch(TaskAction::Toggle {
          id,
          checked
        });
      }
    )
  };

  let on_back = {
    let carousel = carousel.clone();
    Callback::from(move |_: MouseEvent| {
      carousel
        .borrow()
        .go_to_slide(BACK_TARGET_SLIDE);
    })
  };

  let on_copy = {
    let tasks = tasks.clone();
    let copy_overlay = copy_overlay.clone();
    let copy_label = copy_label.clone();
    let copied_count = copied_count.clone();
    let feedback_ms =
      config.ui.copy_feedback_ms;
    Callback::from(move |_: MouseEvent| {
      let text =
        match tasks.aggregator.copy_text() {
          | Ok(text) => text,
          | Err(err) => {
            ui_debug(
              "copy.skip",
              &err.to_string()
            );
            alert(&err.to_string());
            return;
          }
        };
      let count =
        tasks.aggregator.checked_count();

      let copy_overlay = copy_overlay.clone();
      let copy_label = copy_label.clone();
      let copied_count = copied_count.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match clipboard::write_text(&text)
            .await
          {
            | Ok(()) => {
              tracing::info!(
                count,
                "copied tasks to clipboard"
              );
              copied_count.set(count);
              drive_overlay(
                &copy_overlay,
                OverlayAction::Show
              );
              copy_label.set(
                COPIED_LABEL.to_string()
              );
              TimeoutFuture::new(feedback_ms)
                .await;
              copy_label.set(
                COPY_LABEL.to_string()
              );
            }
            | Err(err) => {
              tracing::warn!(error = %err, "clipboard write failed");
              alert(&err.to_string());
            }
          }
        }
      );
    })
  };

  let on_close_copy = {
    let copy_overlay = copy_overlay.clone();
    let fade_ms = config.ui.fade_ms;
    Callback::from(move |_: MouseEvent| {
      drive_overlay(
        &copy_overlay,
        OverlayAction::Hide(fade_ms)
      );
    })
  };

  let today = today_local();
  let calendar_cells =
    picker.picker.grid(today);
  let weekdays = weekday_labels(
    picker.picker.week_start()
  );

  let body = match &*status {
    | LoadStatus::Ready {
      slides, ..
    } => html! {
        <StorySlides
            slides={slides.clone()}
            tasks={tasks.aggregator.tasks().to_vec()}
            copy_label={(*copy_label).clone()}
            on_toggle={on_toggle_task}
            on_back={on_back}
            on_copy={on_copy}
        />
    },
    | other => html! {
        <LoadingIndicator
            text={other.indicator_text().unwrap_or_default()}
            error={matches!(other, LoadStatus::Failed(_))}
        />
    }
  };

  let loaded_date = match &*status {
    | LoadStatus::Ready { date, .. } => {
      date.clone()
    }
    | _ => String::new()
  };

  html! {
      <div class="app">
          <header class="app-header">
              <div class="brand">{ "Daily Reflection" }</div>
              <div class="loaded-date">{ loaded_date }</div>
              <button type="button" id="calendar-button" class="btn" onclick={on_open_calendar}>
                  { "📅" }
              </button>
          </header>
          { body }
          <CalendarOverlay
              mounted={calendar_overlay.phase.is_mounted()}
              class={overlay_classes("calendar-overlay", &calendar_overlay)}
              month_label={picker.picker.month_label()}
              weekdays={weekdays}
              cells={calendar_cells}
              on_prev={on_prev_month}
              on_next={on_next_month}
              on_select={on_select_day}
              on_cancel={on_cancel_calendar}
              on_confirm={on_confirm_calendar}
          />
          <CopyConfirmation
              mounted={copy_overlay.phase.is_mounted()}
              class={overlay_classes("modal-backdrop", &copy_overlay)}
              count={*copied_count}
              on_close={on_close_copy}
          />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
