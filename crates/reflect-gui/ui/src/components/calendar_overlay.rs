use chrono::{
  Datelike,
  NaiveDate
};
use reflect_core::calendar::DayCell;
use yew::{
  Callback,
  Classes,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarOverlayProps {
  pub mounted:     bool,
  pub class:       Classes,
  pub month_label: String,
  pub weekdays:    Vec<&'static str>,
  pub cells:       Vec<DayCell>,
  pub on_prev:     Callback<MouseEvent>,
  pub on_next:     Callback<MouseEvent>,
  pub on_select:   Callback<NaiveDate>,
  pub on_cancel:   Callback<MouseEvent>,
  pub on_confirm:  Callback<MouseEvent>
}

#[function_component(CalendarOverlay)]
pub fn calendar_overlay(
  props: &CalendarOverlayProps
) -> Html {
  if !props.mounted {
    return html! {};
  }

  html! {
      <div id="calendar-overlay" class={props.class.clone()} onclick={props.on_cancel.clone()}>
          <div class="calendar-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="calendar-header">
                  <button type="button" id="prev-month" class="btn" onclick={props.on_prev.clone()}>{ "‹" }</button>
                  <div id="month-year" class="calendar-title">{ &props.month_label }</div>
                  <button type="button" id="next-month" class="btn" onclick={props.on_next.clone()}>{ "›" }</button>
              </div>
              <div class="calendar-weekday-row">
                  {
                      for props.weekdays.iter().map(|label| html! {
                          <div class="calendar-weekday">{ *label }</div>
                      })
                  }
              </div>
              <div id="calendar-days" class="calendar-grid">
                  {
                      for props.cells.iter().map(|cell| {
                          let date = cell.date;
                          let on_select = props.on_select.clone();
                          html! {
                              <button
                                  type="button"
                                  class={classes!(
                                      "calendar-day",
                                      (!cell.in_month).then_some("other-month"),
                                      cell.is_today.then_some("today"),
                                      cell.is_selected.then_some("selected")
                                  )}
                                  onclick={Callback::from(move |_| on_select.emit(date))}
                              >
                                  { date.day() }
                              </button>
                          }
                      })
                  }
              </div>
              <div class="calendar-footer">
                  <button type="button" id="cancel-date" class="btn" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
                  <button type="button" id="confirm-date" class="btn primary" onclick={props.on_confirm.clone()}>{ "Load Reflection" }</button>
              </div>
          </div>
      </div>
  }
}
