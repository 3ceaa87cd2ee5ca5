use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
  pub text:  String,
  pub error: bool
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(
  props: &LoadingIndicatorProps
) -> Html {
  html! {
      <div id="loading-indicator" class={classes!("loading", props.error.then_some("error"))}>
          { &props.text }
      </div>
  }
}
