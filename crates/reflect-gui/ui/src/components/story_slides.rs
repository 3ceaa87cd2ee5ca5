use reflect_core::slides::{
  Slide,
  SlideKind
};
use reflect_core::tasks::Task;
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::TaskReview;

#[derive(Properties, PartialEq)]
pub struct StorySlidesProps {
  pub slides:     Vec<Slide>,
  pub tasks:      Vec<Task>,
  pub copy_label: String,
  pub on_toggle:  Callback<(String, bool)>,
  pub on_back:    Callback<MouseEvent>,
  pub on_copy:    Callback<MouseEvent>
}

#[function_component(StorySlides)]
pub fn story_slides(
  props: &StorySlidesProps
) -> Html {
  html! {
      <div id="reflection-swiper" class="swiper-container">
          <div id="swiper-wrapper-main" class="swiper-wrapper">
              {
                  for props.slides.iter().map(|slide| {
                      // Slide markup is assembled from escaped text only.
                      let content = Html::from_html_unchecked(
                          AttrValue::from(slide.markup.clone())
                      );
                      let extra = if slide.kind == SlideKind::TaskReview {
                          task_controls(props)
                      } else {
                          html! {}
                      };
                      html! {
                          <div class={classes!("swiper-slide", slide.kind.css_class())}>
                              <div class="slide-content">
                                  { content }
                                  { extra }
                              </div>
                          </div>
                      }
                  })
              }
          </div>
          <div class="swiper-pagination"></div>
      </div>
  }
}

fn task_controls(
  props: &StorySlidesProps
) -> Html {
  html! {
      <>
          <TaskReview
              tasks={props.tasks.clone()}
              on_toggle={props.on_toggle.clone()}
          />
          <div class="task-actions">
              <button type="button" id="back-button" class="btn" onclick={props.on_back.clone()}>
                  { "Back" }
              </button>
              <button
                  type="button"
                  id="copy-tasks-button"
                  class="btn primary"
                  onclick={props.on_copy.clone()}
              >
                  { props.copy_label.clone() }
              </button>
          </div>
      </>
  }
}
