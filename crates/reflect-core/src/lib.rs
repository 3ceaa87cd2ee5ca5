pub mod calendar;
pub mod carousel;
pub mod config;
pub mod datetime;
pub mod document;
pub mod error;
pub mod escape;
pub mod loader;
pub mod slides;
pub mod tasks;
pub mod transition;

pub use error::{
  CopyError,
  LoadError
};
pub use loader::{
  LoadedReflection,
  ReflectionRequest,
  ReflectionTransport,
  load_reflection
};
