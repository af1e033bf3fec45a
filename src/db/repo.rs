//! Vocabulary repository
//!
//! Exposes the document-store primitives the handlers need: load the
//! document, append a day or word, check for a word id, and remove word
//! entries by id. Update primitives report whether the store actually
//! modified the row; callers treat "no modification" as an error.

use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::models::{Day, VocabularyDocument, Word};

/// Fixed key of the singleton vocabulary document.
///
/// The service assumes exactly one document per deployment; the key makes
/// that assumption an explicit bootstrap invariant instead of a "first
/// document wins" query.
pub const DOCUMENT_KEY: &str = "voca";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Repository over the singleton vocabulary document
pub struct VocabularyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VocabularyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the document, if it exists.
    ///
    /// A NULL `days` or `words` column surfaces as `None` on the snapshot,
    /// distinct from an empty array.
    pub async fn load(&self) -> Result<Option<VocabularyDocument>, DbError> {
        let row = sqlx::query("SELECT days, words FROM vocabulary WHERE key = $1")
            .bind(DOCUMENT_KEY)
            .fetch_optional(self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let days: Option<Json<Vec<Day>>> = row.try_get("days")?;
        let words: Option<Json<Vec<Word>>> = row.try_get("words")?;

        Ok(Some(VocabularyDocument {
            days: days.map(|Json(d)| d),
            words: words.map(|Json(w)| w),
        }))
    }

    /// Append a day entry. Returns whether the store modified the document.
    pub async fn push_day(&self, day: &Day) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE vocabulary
            SET days = COALESCE(days, '[]'::jsonb) || jsonb_build_array($2::jsonb)
            WHERE key = $1
            "#,
        )
        .bind(DOCUMENT_KEY)
        .bind(Json(day))
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Append a word entry. Returns whether the store modified the document.
    pub async fn push_word(&self, word: &Word) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE vocabulary
            SET words = COALESCE(words, '[]'::jsonb) || jsonb_build_array($2::jsonb)
            WHERE key = $1
            "#,
        )
        .bind(DOCUMENT_KEY)
        .bind(Json(word))
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether any stored word has the given id.
    pub async fn contains_word(&self, id: &str) -> Result<bool, DbError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vocabulary
                WHERE key = $1
                  AND words @> jsonb_build_array(jsonb_build_object('id', $2::text))
            )
            "#,
        )
        .bind(DOCUMENT_KEY)
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Remove every word entry with the given id in one atomic update.
    ///
    /// Returns whether the store modified the document. The WHERE clause
    /// requires a matching entry, so a removal that lost a race to another
    /// delete reports no modification rather than succeeding.
    pub async fn pull_word(&self, id: &str) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE vocabulary
            SET words = (
                SELECT COALESCE(jsonb_agg(entry), '[]'::jsonb)
                FROM jsonb_array_elements(words) AS entry
                WHERE entry->>'id' IS DISTINCT FROM $2
            )
            WHERE key = $1
              AND words @> jsonb_build_array(jsonb_build_object('id', $2::text))
            "#,
        )
        .bind(DOCUMENT_KEY)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
