use grammar_core::ProgressState;
use grammar_core::model::{Topic, TopicId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleVm {
    pub name: String,
    pub description: String,
    pub formula: String,
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub title: String,
    pub icon: String,
    pub completed: bool,
    pub toggle_label: String,
    pub rules: Vec<RuleVm>,
}

#[must_use]
pub fn map_topic_card(topic: &Topic, progress: &ProgressState) -> TopicCardVm {
    let completed = progress.is_complete(topic.id());
    let toggle_label = if completed {
        "Изучено".to_owned()
    } else {
        "Отметить как изученное".to_owned()
    };

    let rules = topic
        .rules()
        .iter()
        .map(|rule| RuleVm {
            name: rule.name().to_owned(),
            description: rule.description().to_owned(),
            formula: rule.formula().to_owned(),
            examples: rule.examples().to_vec(),
        })
        .collect();

    TopicCardVm {
        id: topic.id().clone(),
        title: topic.title().to_owned(),
        icon: topic.icon().to_owned(),
        completed,
        toggle_label,
        rules,
    }
}
