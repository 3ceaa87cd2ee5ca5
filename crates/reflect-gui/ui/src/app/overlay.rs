use gloo::timers::future::TimeoutFuture;
use reflect_core::transition::TransitionStep;
use yew::UseReducerHandle;

use super::state::{
  OverlayAction,
  OverlayState
};

/// Applies a show/hide request and schedules the second phase of the
/// fade. The scheduled phase is re-checked by the reducer, so a late
/// timer never undoes a newer request.
pub fn drive_overlay(
  overlay: &UseReducerHandle<OverlayState>,
  action: OverlayAction
) {
  let step = overlay.step_for(&action);
  overlay.dispatch(action);

  let (delay_ms, target) = match step {
    | TransitionStep::NextTick(target) => {
      (0, target)
    }
    | TransitionStep::After(
      delay_ms,
      target
    ) => (delay_ms, target),
    | TransitionStep::Done => return
  };

  let overlay = overlay.clone();
  wasm_bindgen_futures::spawn_local(
    async move {
      TimeoutFuture::new(delay_ms).await;
      overlay.dispatch(
        OverlayAction::Settle(target)
      );
    }
  );
}

pub fn overlay_classes(
  base: &'static str,
  overlay: &OverlayState
) -> yew::Classes {
  yew::classes!(
    base,
    overlay
      .phase
      .has_visible_class()
      .then_some("visible")
  )
}
