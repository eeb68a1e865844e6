#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod progress;
pub mod quiz;

pub use catalog::{Catalog, CatalogDraft, CatalogError, CatalogLoadError};
pub use progress::ProgressState;
pub use quiz::{QuizPhase, QuizState, ResultTier};
