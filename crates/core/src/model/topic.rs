use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::TopicId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic id cannot be empty")]
    EmptyId,

    #[error("topic '{id}' has an empty title")]
    EmptyTitle { id: String },

    #[error("topic '{id}' has no rules")]
    NoRules { id: String },

    #[error("topic '{id}' rule #{index} has an empty name")]
    EmptyRuleName { id: String, index: usize },

    #[error("rule '{name}' has an empty description")]
    EmptyRuleDescription { name: String },

    #[error("rule '{name}' has an empty formula")]
    EmptyRuleFormula { name: String },

    #[error("rule '{name}' has no examples")]
    NoExamples { name: String },

    #[error("rule '{name}' example #{index} is empty")]
    EmptyExample { name: String, index: usize },
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Unvalidated rule as it appears in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleDraft {
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
    pub formula: String,
}

/// Unvalidated topic as it appears in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicDraft {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub rules: Vec<RuleDraft>,
}

impl RuleDraft {
    fn validate(self, topic_id: &str, index: usize) -> Result<Rule, TopicError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(TopicError::EmptyRuleName {
                id: topic_id.to_owned(),
                index,
            });
        }
        if self.description.trim().is_empty() {
            return Err(TopicError::EmptyRuleDescription { name });
        }
        if self.formula.trim().is_empty() {
            return Err(TopicError::EmptyRuleFormula { name });
        }
        if self.examples.is_empty() {
            return Err(TopicError::NoExamples { name });
        }
        for (i, example) in self.examples.iter().enumerate() {
            if example.trim().is_empty() {
                return Err(TopicError::EmptyExample { name, index: i });
            }
        }

        Ok(Rule {
            name,
            description: self.description.trim().to_owned(),
            examples: self.examples,
            formula: self.formula.trim().to_owned(),
        })
    }
}

impl TopicDraft {
    /// Validates the draft into a domain `Topic`.
    ///
    /// # Errors
    ///
    /// Returns `TopicError` if the id, title, or any rule is malformed.
    pub fn validate(self) -> Result<Topic, TopicError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(TopicError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TopicError::EmptyTitle { id: id.to_owned() });
        }
        if self.rules.is_empty() {
            return Err(TopicError::NoRules { id: id.to_owned() });
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for (index, draft) in self.rules.into_iter().enumerate() {
            rules.push(draft.validate(id, index)?);
        }

        Ok(Topic {
            id: TopicId::new(id),
            title: self.title.trim().to_owned(),
            icon: self.icon.trim().to_owned(),
            rules,
        })
    }
}

//
// ─── RULE ──────────────────────────────────────────────────────────────────────
//

/// A single grammatical pattern with description, formula, and examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    description: String,
    examples: Vec<String>,
    formula: String,
}

impl Rule {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A grammar subject grouping one or more rules.
///
/// Topics are immutable catalog data; they are never created or modified at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    title: String,
    icon: String,
    rules: Vec<Rule>,
}

impl Topic {
    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Icon tag rendered by the presentation layer (e.g. `"clock"`).
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
