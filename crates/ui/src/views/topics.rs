use dioxus::prelude::*;

use grammar_core::ProgressState;

use crate::context::AppContext;
use crate::vm::{TopicCardVm, map_topic_card};

/// Grid of topic cards with rule disclosure panels.
#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_context::<Signal<ProgressState>>();
    let catalog = ctx.catalog();

    let cards = catalog
        .topics()
        .iter()
        .map(|topic| map_topic_card(topic, &progress.read()))
        .collect::<Vec<_>>();

    let topic_cards = cards.into_iter().map(|card| {
        rsx! {
            TopicCard { card }
        }
    });

    rsx! {
        div { class: "page topics-page",
            div { class: "topic-grid", {topic_cards} }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    let mut progress = use_context::<Signal<ProgressState>>();
    let topic_id = card.id.clone();
    let toggle_class = if card.completed {
        "btn btn-secondary"
    } else {
        "btn btn-primary"
    };

    let rule_panels = card.rules.iter().map(|rule| {
        let examples = rule.examples.iter().map(|example| {
            rsx! {
                li {
                    span { class: "icon icon-arrow-right" }
                    "{example}"
                }
            }
        });

        rsx! {
            details { class: "rule",
                summary { class: "rule-name", "{rule.name}" }
                div { class: "rule-body",
                    p { class: "rule-description", "{rule.description}" }
                    div { class: "rule-formula",
                        p { class: "label", "Формула:" }
                        code { "{rule.formula}" }
                    }
                    div { class: "rule-examples",
                        p { class: "label", "Примеры:" }
                        ul { {examples} }
                    }
                }
            }
        }
    });

    rsx! {
        article { class: "card topic-card",
            if card.completed {
                span { class: "badge badge-done",
                    span { class: "icon icon-check" }
                }
            }
            header { class: "card-header",
                h3 {
                    span { class: "icon icon-{card.icon}" }
                    "{card.title}"
                }
            }
            div { class: "card-body",
                {rule_panels}
                button {
                    class: "{toggle_class}",
                    r#type: "button",
                    onclick: move |_| progress.write().toggle(topic_id.clone()),
                    "{card.toggle_label}"
                }
            }
        }
    }
}
