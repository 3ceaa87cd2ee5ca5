mod calendar_overlay;
mod copy_confirmation;
mod loading_indicator;
mod story_slides;
mod task_review;

pub use calendar_overlay::CalendarOverlay;
pub use copy_confirmation::CopyConfirmation;
pub use loading_indicator::LoadingIndicator;
pub use story_slides::StorySlides;
pub use task_review::TaskReview;
