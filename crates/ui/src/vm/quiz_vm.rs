use grammar_core::model::QuizQuestion;
use grammar_core::{QuizState, ResultTier};

//
// ─── OPTION TONES ──────────────────────────────────────────────────────────────
//

/// How an answer option is rendered relative to the locked selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    /// No answer locked yet.
    Neutral,
    /// The correct option, revealed once any answer is locked.
    Correct,
    /// The locked option when it is wrong.
    Incorrect,
    /// Any other option after the lock.
    Muted,
}

impl OptionTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionTone::Neutral => "option--neutral",
            OptionTone::Correct => "option--correct",
            OptionTone::Incorrect => "option--incorrect",
            OptionTone::Muted => "option--muted",
        }
    }
}

//
// ─── VIEW MODELS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub label: String,
    pub tone: OptionTone,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub counter_label: String,
    pub topic_tag: String,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    /// Present only once an answer is locked.
    pub next_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub message: String,
    pub icon: String,
}

//
// ─── MAPPING ───────────────────────────────────────────────────────────────────
//

/// Maps the answering phase to a renderable question card.
///
/// Returns `None` once the quiz is finished (or if the state points past the
/// question list, which a validated catalog never produces).
#[must_use]
pub fn map_quiz_question(questions: &[QuizQuestion], state: &QuizState) -> Option<QuizQuestionVm> {
    let index = state.current_question()?;
    let question = questions.get(index)?;
    let selected = state.selected();
    let answered = selected.is_some();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let tone = match selected {
                None => OptionTone::Neutral,
                Some(_) if i == question.correct() => OptionTone::Correct,
                Some(chosen) if i == chosen => OptionTone::Incorrect,
                Some(_) => OptionTone::Muted,
            };
            QuizOptionVm {
                label: label.clone(),
                tone,
                disabled: answered,
            }
        })
        .collect();

    let next_label = answered.then(|| {
        if index + 1 < questions.len() {
            "Следующий вопрос".to_owned()
        } else {
            "Показать результат".to_owned()
        }
    });

    Some(QuizQuestionVm {
        counter_label: format!("Вопрос {} из {}", index + 1, questions.len()),
        topic_tag: question.topic().as_str().to_owned(),
        prompt: question.prompt().to_owned(),
        options,
        next_label,
    })
}

/// Maps a finished quiz to the result panel content.
#[must_use]
pub fn map_quiz_result(questions: &[QuizQuestion], state: &QuizState) -> QuizResultVm {
    let total = questions.len();
    let score = state.score();

    let (message, icon) = match ResultTier::classify(score, total) {
        ResultTier::AllCorrect => (
            "Отлично! Вы ответили правильно на все вопросы!",
            "trophy",
        ),
        ResultTier::AtLeastHalf => ("Хороший результат! Продолжайте учиться!", "thumbs-up"),
        ResultTier::BelowHalf => ("Повторите материал и попробуйте снова", "book-open"),
    };

    QuizResultVm {
        score_label: format!("{score}/{total}"),
        message: message.to_owned(),
        icon: icon.to_owned(),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
