use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    QuestionDraft, QuestionError, QuizQuestion, Topic, TopicDraft, TopicError, TopicId,
};

/// Catalog document compiled into the binary.
///
/// Validated by `Catalog::builtin`; malformed edits fail at startup, not at
/// render time.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no topics")]
    NoTopics,

    #[error("catalog has no quiz questions")]
    NoQuestions,

    #[error("duplicate topic id '{id}'")]
    DuplicateTopic { id: String },

    #[error("question '{prompt}' references unknown topic '{id}'")]
    UnknownQuestionTopic { prompt: String, id: String },

    #[error(transparent)]
    Topic(#[from] TopicError),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted while loading a catalog document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated catalog as deserialized from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogDraft {
    pub topics: Vec<TopicDraft>,
    pub questions: Vec<QuestionDraft>,
}

impl CatalogDraft {
    /// Validates every topic and question, then the cross-references.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on the first malformed entry, duplicate topic
    /// id, or question referencing a topic the catalog does not contain.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        if self.topics.is_empty() {
            return Err(CatalogError::NoTopics);
        }
        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }

        let mut topics = Vec::with_capacity(self.topics.len());
        let mut seen = BTreeSet::new();
        for draft in self.topics {
            let topic = draft.validate()?;
            if !seen.insert(topic.id().clone()) {
                return Err(CatalogError::DuplicateTopic {
                    id: topic.id().as_str().to_owned(),
                });
            }
            topics.push(topic);
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for draft in self.questions {
            let question = draft.validate()?;
            if !seen.contains(question.topic()) {
                return Err(CatalogError::UnknownQuestionTopic {
                    prompt: question.prompt().to_owned(),
                    id: question.topic().as_str().to_owned(),
                });
            }
            questions.push(question);
        }

        Ok(Catalog { topics, questions })
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The full static content set: topics with rules, plus quiz questions.
///
/// Loaded once at startup and shared read-only for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
    questions: Vec<QuizQuestion>,
}

impl Catalog {
    /// Parses and validates a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError::Parse` on malformed JSON and
    /// `CatalogLoadError::Invalid` on content that fails validation.
    pub fn from_json(document: &str) -> Result<Self, CatalogLoadError> {
        let draft: CatalogDraft = serde_json::from_str(document)?;
        Ok(draft.validate()?)
    }

    /// Loads the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the embedded document is malformed; the
    /// test suite keeps this from shipping.
    pub fn builtin() -> Result<Self, CatalogLoadError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Looks up a topic by id.
    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
