//! Domain models with validation at construction
//!
//! Word creation input is validated when building the stored entry.
//! Invalid input returns ValidationError, not panic.

pub mod day;
pub mod document;
pub mod validation;
pub mod word;

pub use day::Day;
pub use document::VocabularyDocument;
pub use validation::ValidationError;
pub use word::Word;
