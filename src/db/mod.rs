//! Database layer - connection pool, bootstrap, and the vocabulary repository
//!
//! The vocabulary document is one row in the `vocabulary` table, addressed
//! by a fixed singleton key. Array mutations go through Postgres JSONB
//! operators so each update is atomic at the document level; compound
//! read-then-write sequences are not coordinated.

pub mod migrations;
pub mod pool;
pub mod repo;

pub use pool::create_pool;
pub use repo::{DbError, VocabularyRepo, DOCUMENT_KEY};
