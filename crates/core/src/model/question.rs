use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::TopicId;

/// Number of answer options every quiz question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question '{prompt}' must have 4 options, found {found}")]
    WrongOptionCount { prompt: String, found: usize },

    #[error("question '{prompt}' option #{index} is empty")]
    EmptyOption { prompt: String, index: usize },

    #[error("question '{prompt}' correct index {index} is out of range")]
    CorrectIndexOutOfRange { prompt: String, index: usize },

    #[error("question '{prompt}' references an empty topic id")]
    EmptyTopicId { prompt: String },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated quiz question as it appears in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub topic: String,
}

impl QuestionDraft {
    /// Validates the draft into a domain `QuizQuestion`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt, options, correct index, or topic
    /// reference is malformed.
    pub fn validate(self) -> Result<QuizQuestion, QuestionError> {
        let prompt = self.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount {
                prompt,
                found: self.options.len(),
            });
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { prompt, index });
            }
        }
        if self.correct >= self.options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                prompt,
                index: self.correct,
            });
        }
        if self.topic.trim().is_empty() {
            return Err(QuestionError::EmptyTopicId { prompt });
        }

        Ok(QuizQuestion {
            prompt,
            options: self.options,
            correct: self.correct,
            topic: TopicId::new(self.topic.trim()),
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice quiz question tied to a catalog topic.
///
/// Immutable catalog data; the correct index is guaranteed in range by
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct: usize,
    topic: TopicId,
}

impl QuizQuestion {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option, always `< options().len()`.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn topic(&self) -> &TopicId {
        &self.topic
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question_draft() -> QuestionDraft {
        QuestionDraft {
            prompt: "Choose the correct form: \"She ___ to school every day\"".to_owned(),
            options: vec![
                "go".to_owned(),
                "goes".to_owned(),
                "going".to_owned(),
                "gone".to_owned(),
            ],
            correct: 1,
            topic: "tenses".to_owned(),
        }
    }

    #[test]
    fn question_rejects_empty_prompt() {
        let mut draft = question_draft();
        draft.prompt = " ".to_owned();
        assert_eq!(draft.validate().unwrap_err(), QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_rejects_wrong_option_count() {
        let mut draft = question_draft();
        draft.options.pop();
        assert!(matches!(
            draft.validate().unwrap_err(),
            QuestionError::WrongOptionCount { found: 3, .. }
        ));
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let mut draft = question_draft();
        draft.correct = 4;
        assert!(matches!(
            draft.validate().unwrap_err(),
            QuestionError::CorrectIndexOutOfRange { index: 4, .. }
        ));
    }

    #[test]
    fn question_rejects_empty_option() {
        let mut draft = question_draft();
        draft.options[2] = String::new();
        assert!(matches!(
            draft.validate().unwrap_err(),
            QuestionError::EmptyOption { index: 2, .. }
        ));
    }

    #[test]
    fn question_rejects_empty_topic() {
        let mut draft = question_draft();
        draft.topic = "  ".to_owned();
        assert!(matches!(
            draft.validate().unwrap_err(),
            QuestionError::EmptyTopicId { .. }
        ));
    }

    #[test]
    fn question_happy_path() {
        let question = question_draft().validate().unwrap();
        assert_eq!(question.correct(), 1);
        assert_eq!(question.options().len(), OPTION_COUNT);
        assert_eq!(question.topic(), &TopicId::new("tenses"));
    }
}
