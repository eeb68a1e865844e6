use crate::model::QuizQuestion;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where the learner is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Presenting `question`; `selected` locks once an option is chosen.
    Answering {
        question: usize,
        selected: Option<usize>,
    },
    /// All questions answered; the result panel is shown.
    Finished,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Quiz position, locked answer, and running score.
///
/// All transitions are total: an illegal call (answering twice, advancing
/// without a selection, out-of-range choice) leaves the state untouched and
/// reports `false`. Callers never need an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    phase: QuizPhase,
    score: usize,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    /// Creates the initial state: first question, nothing selected, score 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Answering {
                question: 0,
                selected: None,
            },
            score: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished)
    }

    /// Index of the question currently presented, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Answering { question, .. } => Some(question),
            QuizPhase::Finished => None,
        }
    }

    /// The locked option index for the current question, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Answering { selected, .. } => selected,
            QuizPhase::Finished => None,
        }
    }

    /// Locks `choice` as the answer for the current question.
    ///
    /// Scores one point iff the choice matches the question's correct index;
    /// a question can score at most once because re-selection is rejected.
    /// Returns whether the transition applied.
    pub fn select_answer(&mut self, questions: &[QuizQuestion], choice: usize) -> bool {
        let QuizPhase::Answering { question, selected } = &mut self.phase else {
            return false;
        };
        if selected.is_some() {
            return false;
        }
        let Some(current) = questions.get(*question) else {
            return false;
        };
        if choice >= current.options().len() {
            return false;
        }

        *selected = Some(choice);
        if choice == current.correct() {
            self.score += 1;
        }
        true
    }

    /// Moves past the current question once an answer is locked.
    ///
    /// Presents the next question with the selection cleared, or finishes the
    /// quiz after the last one. A no-op without a locked answer. Returns
    /// whether the transition applied.
    pub fn advance(&mut self, questions: &[QuizQuestion]) -> bool {
        let QuizPhase::Answering { question, selected } = self.phase else {
            return false;
        };
        if selected.is_none() {
            return false;
        }

        self.phase = if question + 1 < questions.len() {
            QuizPhase::Answering {
                question: question + 1,
                selected: None,
            }
        } else {
            QuizPhase::Finished
        };
        true
    }

    /// Returns to the initial state. Legal from any phase.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

//
// ─── RESULT TIER ───────────────────────────────────────────────────────────────
//

/// Final result classification shown on the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    AllCorrect,
    AtLeastHalf,
    BelowHalf,
}

impl ResultTier {
    /// Classifies a final score; exactly half lands in the middle tier.
    #[must_use]
    pub fn classify(score: usize, total: usize) -> Self {
        if score >= total {
            Self::AllCorrect
        } else if score * 2 >= total {
            Self::AtLeastHalf
        } else {
            Self::BelowHalf
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
