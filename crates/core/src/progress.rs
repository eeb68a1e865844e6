use std::collections::BTreeSet;

use crate::model::TopicId;

/// Set of topics the learner has marked as studied.
///
/// Session-local: starts empty and is never persisted. Toggling is the only
/// mutation; an even number of toggles on one id is always a no-op overall.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    completed: BTreeSet<TopicId>,
}

impl ProgressState {
    /// Creates an empty progress set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the topic if absent, removes it if present.
    ///
    /// Ids outside the catalog are accepted as-is; the tracker performs no
    /// catalog lookup.
    pub fn toggle(&mut self, id: TopicId) {
        if !self.completed.remove(&id) {
            self.completed.insert(id);
        }
    }

    #[must_use]
    pub fn is_complete(&self, id: &TopicId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completion percentage over `total_topics`, rounded for display.
    ///
    /// Returns 0 for an empty catalog.
    #[must_use]
    pub fn percent(&self, total_topics: usize) -> u8 {
        if total_topics == 0 {
            return 0;
        }
        let scaled = (self.completed.len() * 100 + total_topics / 2) / total_topics;
        u8::try_from(scaled.min(100)).unwrap_or(100)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
