use reflect_core::CopyError;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen_futures::JsFuture;

/// Writes plain text to the system clipboard.
pub async fn write_text(
  text: &str
) -> Result<(), CopyError> {
  let navigator = web_sys::window()
    .map(|window| window.navigator())
    .ok_or(CopyError::Unavailable)?;

  let has_clipboard = js_sys::Reflect::has(
    &navigator,
    &JsValue::from_str("clipboard")
  )
  .unwrap_or(false);
  if !has_clipboard {
    tracing::warn!(
      "navigator.clipboard is not \
       exposed"
    );
    return Err(CopyError::Unavailable);
  }

  let promise =
    navigator.clipboard().write_text(text);
  JsFuture::from(promise)
    .await
    .map(|_| ())
    .map_err(|error| {
      let message = error
        .as_string()
        .or_else(|| {
          error
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| {
          "clipboard write rejected"
            .to_string()
        });
      tracing::error!(%message, "clipboard write failed");
      CopyError::Rejected(message)
    })
}
