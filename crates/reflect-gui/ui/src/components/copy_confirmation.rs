use yew::{
  Callback,
  Classes,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CopyConfirmationProps {
  pub mounted:  bool,
  pub class:    Classes,
  pub count:    usize,
  pub on_close: Callback<MouseEvent>
}

#[function_component(CopyConfirmation)]
pub fn copy_confirmation(
  props: &CopyConfirmationProps
) -> Html {
  if !props.mounted {
    return html! {};
  }

  let noun = if props.count == 1 {
    "task"
  } else {
    "tasks"
  };

  html! {
      <div id="copy-modal" class={props.class.clone()}>
          <div class="modal">
              <div class="header">{ "Copied!" }</div>
              <div class="content">
                  <p>{ format!("{} {noun} copied to your clipboard.", props.count) }</p>
                  <div class="footer">
                      <button type="button" id="close-modal" class="btn" onclick={props.on_close.clone()}>
                          { "Close" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
