mod ids;
mod question;
mod topic;

pub use ids::TopicId;
pub use question::{OPTION_COUNT, QuestionDraft, QuestionError, QuizQuestion};
pub use topic::{Rule, RuleDraft, Topic, TopicDraft, TopicError};
