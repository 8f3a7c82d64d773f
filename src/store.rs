//! # Question Store
//!
//! In-memory bank of trivia records, loaded once from a JSON file at startup
//! and read-only for the rest of the process lifetime. Handlers can share it
//! without locking.
//!
//! ## Dataset
//! - One JSON array of objects, deduplicated offline
//! - Only the `question` field matters to the server (search eligibility);
//!   everything else (answer, choices, ...) is carried through untouched
//! - Records have no identity beyond their position in the file

use std::{fs::read_to_string, path::Path};

use rand::seq::IndexedRandom;
use serde_json::{Map, Value};

use crate::error::LoadError;

/// One trivia entry: an open-ended key-value record.
pub type Question = Map<String, Value>;

pub struct Store {
    questions: Vec<Question>,
}

impl Store {
    /// Reads and parses the dataset. Any failure here is fatal: the server
    /// must not start serving without a populated store.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let questions: Vec<Question> = serde_json::from_str(&raw)?;

        Self::from_records(questions)
    }

    pub fn from_records(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Uniform draw from the thread RNG. This generator is never reseeded,
    /// so consecutive calls are unrelated to each other and to the daily
    /// selection.
    pub fn pick_random(&self) -> Option<&Question> {
        self.questions.choose(&mut rand::rng())
    }

    /// Case-insensitive substring match over the `question` field, in store
    /// order. Records whose `question` field is missing, non-text, or empty
    /// are skipped no matter what their other fields contain. An empty query
    /// matches every eligible record.
    pub fn search(&self, query: &str) -> Vec<&Question> {
        let needle = query.to_lowercase();

        self.questions
            .iter()
            .filter(|record| {
                record
                    .get("question")
                    .and_then(Value::as_str)
                    .is_some_and(|text| {
                        !text.is_empty() && text.to_lowercase().contains(&needle)
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Question {
        serde_json::from_value(value).unwrap()
    }

    fn fixture() -> Store {
        Store::from_records(vec![
            record(json!({"question": "What beats a flush?", "answer": "A full house"})),
            record(json!({"question": "Name a bluff tell"})),
            record(json!({"answer": "no question field"})),
        ])
        .unwrap()
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = Store::load(Path::new("/nonexistent/questions.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn malformed_dataset_is_rejected() {
        let path = std::env::temp_dir().join("trivia-malformed-questions.json");
        std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let result = Store::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Store::from_records(vec![]), Err(LoadError::Empty)));
    }

    #[test]
    fn search_matches_substring() {
        let store = fixture();
        let results = store.search("flush");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["question"], "What beats a flush?");
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = fixture();
        assert_eq!(store.search("FLUSH"), store.search("flush"));
        assert_eq!(store.search("BLUFF"), store.search("bluff"));
    }

    #[test]
    fn empty_query_matches_every_searchable_record_in_order() {
        let store = fixture();
        let results = store.search("");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["question"], "What beats a flush?");
        assert_eq!(results[1]["question"], "Name a bluff tell");
    }

    #[test]
    fn records_without_question_field_are_excluded() {
        let store = fixture();
        // "no question field" lives in the answer field of the third record
        assert!(store.search("no question field").is_empty());
    }

    #[test]
    fn empty_question_text_is_not_searchable() {
        let store = Store::from_records(vec![
            record(json!({"question": ""})),
            record(json!({"question": "Only real text survives"})),
        ])
        .unwrap();

        assert_eq!(store.search("").len(), 1);
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        assert!(fixture().search("xyz").is_empty());
    }

    #[test]
    fn extra_fields_are_preserved() {
        let store = fixture();
        let results = store.search("flush");

        assert_eq!(results[0]["answer"], "A full house");
    }

    #[test]
    fn pick_random_draws_from_the_store() {
        let store = fixture();

        for _ in 0..20 {
            let picked = store.pick_random().unwrap();
            assert!(store.search("").contains(&picked) || !picked.contains_key("question"));
        }
    }
}
