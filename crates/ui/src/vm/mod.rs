mod progress_vm;
mod quiz_vm;
mod topic_vm;

pub use progress_vm::{ProgressVm, map_progress};
pub use quiz_vm::{
    OptionTone, QuizOptionVm, QuizQuestionVm, QuizResultVm, map_quiz_question, map_quiz_result,
};
pub use topic_vm::{RuleVm, TopicCardVm, map_topic_card};
