//! The singleton vocabulary document

use super::{Day, Word};

/// Snapshot of the one vocabulary document the service operates on.
///
/// Both fields are optional: a document created out of band may lack
/// either array, which the read endpoints report as not-found. An array
/// that exists but is empty is not the same condition and succeeds.
#[derive(Debug, Clone, Default)]
pub struct VocabularyDocument {
    pub days: Option<Vec<Day>>,
    pub words: Option<Vec<Word>>,
}
