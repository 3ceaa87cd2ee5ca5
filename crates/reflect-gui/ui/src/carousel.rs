use reflect_core::carousel::{
  CarouselOptions,
  clamp_slide
};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

pub const CONTAINER_SELECTOR: &str =
  ".swiper-container";

#[wasm_bindgen]
extern "C" {
  type Swiper;

  #[wasm_bindgen(constructor, catch)]
  fn new(
    container: &str,
    options: &JsValue
  ) -> Result<Swiper, JsValue>;

  #[wasm_bindgen(method, js_name = slideTo)]
  fn slide_to(this: &Swiper, index: u32);

  #[wasm_bindgen(method)]
  fn destroy(
    this: &Swiper,
    delete_instance: bool,
    clean_styles: bool
  );
}

/// Owns the live swipe widget for the rendered story. Without the
/// widget script the slides stay a plain scrollable stack.
#[derive(Default)]
pub struct SlideCarousel {
  instance:    Option<Swiper>,
  slide_count: usize
}

impl SlideCarousel {
  /// Tears down any previous widget and binds a new one to the slides
  /// currently in the DOM.
  pub fn reinitialize(
    &mut self,
    slide_count: usize
  ) {
    self.teardown();
    self.slide_count = slide_count;

    if !swiper_available() {
      tracing::warn!(
        "Swiper global not found; \
         slides fall back to scrolling"
      );
      return;
    }

    let options =
      match serde_wasm_bindgen::to_value(
        &CarouselOptions::default()
      ) {
        | Ok(options) => options,
        | Err(error) => {
          tracing::error!(%error, "failed encoding carousel options");
          return;
        }
      };

    match Swiper::new(
      CONTAINER_SELECTOR,
      &options
    ) {
      | Ok(instance) => {
        tracing::info!(
          slide_count,
          "carousel initialized"
        );
        self.instance = Some(instance);
      }
      | Err(error) => {
        tracing::error!(error = ?error, "carousel init failed");
      }
    }
  }

  pub fn go_to_slide(&self, index: u32) {
    let index =
      clamp_slide(index, self.slide_count);
    match &self.instance {
      | Some(instance) => {
        instance.slide_to(index);
      }
      | None => {
        tracing::debug!(
          index,
          "no carousel instance; ignoring \
           slide jump"
        );
      }
    }
  }

  pub fn teardown(&mut self) {
    if let Some(instance) =
      self.instance.take()
    {
      instance.destroy(true, false);
    }
  }
}

fn swiper_available() -> bool {
  js_sys::Reflect::has(
    &js_sys::global(),
    &JsValue::from_str("Swiper")
  )
  .unwrap_or(false)
}
