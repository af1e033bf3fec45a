//! Word entries - terms with meanings, grouped under a day

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::ValidationError;

/// A single word entry.
///
/// `day` is a string here while `Day::day` is numeric - an intentional
/// inconsistency carried over from the original contract. List filtering
/// compares `day` by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub day: String,
    pub word: String,
    pub meaning: String,
    /// Never mutated after creation; no endpoint marks a word done.
    #[serde(rename = "isDone", default)]
    pub is_done: bool,
}

impl Word {
    /// Build a word from a creation request body.
    ///
    /// Each required field must be truthy: empty strings, zero, false, and
    /// null are all treated as missing. Truthy numbers and booleans are
    /// stored in their string form. Any `isDone` in the body is ignored;
    /// stored words always start with `is_done = false`.
    pub fn from_request(body: &Value) -> Result<Word, ValidationError> {
        Ok(Word {
            id: required(body, "id")?,
            day: required(body, "day")?,
            word: required(body, "word")?,
            meaning: required(body, "meaning")?,
            is_done: false,
        })
    }

    /// Exact string match on the `day` field, preserving stored order.
    pub fn filter_by_day<'a>(words: &'a [Word], day: &str) -> Vec<&'a Word> {
        words.iter().filter(|w| w.day == day).collect()
    }
}

fn required(body: &Value, field: &'static str) -> Result<String, ValidationError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Ok(n.to_string()),
        Some(Value::Bool(true)) => Ok("true".to_string()),
        _ => Err(ValidationError::Missing { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn word(id: &str, day: &str) -> Word {
        Word {
            id: id.into(),
            day: day.into(),
            word: "hello".into(),
            meaning: "a greeting".into(),
            is_done: false,
        }
    }

    #[test]
    fn builds_word_from_valid_body() {
        let body = json!({"id": "w1", "day": "1", "word": "hello", "meaning": "a greeting"});
        let word = Word::from_request(&body).unwrap();
        assert_eq!(word.id, "w1");
        assert_eq!(word.day, "1");
        assert!(!word.is_done);
    }

    #[test]
    fn is_done_from_body_is_ignored() {
        let body = json!({
            "id": "w1", "day": "1", "word": "hello", "meaning": "a greeting",
            "isDone": true
        });
        assert!(!Word::from_request(&body).unwrap().is_done);
    }

    #[test]
    fn rejects_missing_field() {
        let body = json!({"id": "w1", "day": "1", "word": "hello"});
        assert_eq!(
            Word::from_request(&body),
            Err(ValidationError::Missing { field: "meaning" })
        );
    }

    #[test]
    fn coerces_truthy_numbers_and_booleans() {
        let body = json!({"id": "w1", "day": 1, "word": "hello", "meaning": "a greeting"});
        let word = Word::from_request(&body).unwrap();
        assert_eq!(word.day, "1");

        let body = json!({"id": "w1", "day": "1", "word": true, "meaning": "a greeting"});
        assert_eq!(Word::from_request(&body).unwrap().word, "true");
    }

    #[test]
    fn rejects_falsy_fields() {
        // Null, empty string, zero, and false all fail the presence check.
        for bad in [json!(null), json!(""), json!(0), json!(false)] {
            let body = json!({"id": bad, "day": "1", "word": "hello", "meaning": "a greeting"});
            assert_eq!(
                Word::from_request(&body),
                Err(ValidationError::Missing { field: "id" })
            );
        }
    }

    #[test]
    fn filter_is_exact_string_match() {
        let words = vec![word("w1", "1"), word("w2", "10"), word("w3", "1")];
        let hits = Word::filter_by_day(&words, "1");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "w1");
        assert_eq!(hits[1].id, "w3");
        assert!(Word::filter_by_day(&words, "2").is_empty());
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let json = serde_json::to_value(word("w1", "1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "w1",
                "day": "1",
                "word": "hello",
                "meaning": "a greeting",
                "isDone": false
            })
        );
    }

    #[test]
    fn deserializes_without_is_done() {
        // Documents created out of band may predate the flag.
        let word: Word = serde_json::from_value(json!({
            "id": "w1", "day": "1", "word": "hello", "meaning": "a greeting"
        }))
        .unwrap();
        assert!(!word.is_done);
    }
}
