use std::sync::Arc;

use dioxus::prelude::*;

use grammar_core::QuizState;

use crate::context::AppContext;
use crate::vm::{QuizQuestionVm, QuizResultVm, map_quiz_question, map_quiz_result};

/// Quiz panel: one question card at a time, then the result panel.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_context::<Signal<QuizState>>();
    let catalog = ctx.catalog();

    let state = quiz.read().clone();
    if state.is_finished() {
        let vm = map_quiz_result(catalog.questions(), &state);
        return rsx! {
            ResultCard { vm }
        };
    }

    match map_quiz_question(catalog.questions(), &state) {
        Some(vm) => rsx! {
            QuestionCard { vm }
        },
        // Unreachable with a validated catalog; render nothing rather than panic.
        None => rsx! {},
    }
}

#[component]
fn QuestionCard(vm: QuizQuestionVm) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_context::<Signal<QuizState>>();
    let catalog = ctx.catalog();

    let catalog_for_options = Arc::clone(&catalog);
    let option_buttons = vm.options.iter().enumerate().map(|(index, option)| {
        let catalog = Arc::clone(&catalog_for_options);
        let mut quiz = quiz;
        let label = option.label.clone();
        let tone_class = option.tone.css_class();
        let disabled = option.disabled;

        rsx! {
            button {
                class: "btn option {tone_class}",
                r#type: "button",
                disabled: disabled,
                onclick: move |_| {
                    quiz.write().select_answer(catalog.questions(), index);
                },
                "{label}"
            }
        }
    });

    let next_button = vm.next_label.clone().map(|label| {
        let catalog = Arc::clone(&catalog);
        let mut quiz = quiz;

        rsx! {
            button {
                class: "btn btn-primary btn-wide",
                r#type: "button",
                onclick: move |_| {
                    quiz.write().advance(catalog.questions());
                },
                "{label}"
            }
        }
    });

    rsx! {
        section { class: "card quiz-card",
            header { class: "card-header quiz-header",
                h3 { "{vm.counter_label}" }
                span { class: "badge badge-outline", "{vm.topic_tag}" }
            }
            div { class: "card-body",
                p { class: "quiz-prompt", "{vm.prompt}" }
                div { class: "quiz-options", {option_buttons} }
                {next_button}
            }
        }
    }
}

#[component]
fn ResultCard(vm: QuizResultVm) -> Element {
    let mut quiz = use_context::<Signal<QuizState>>();

    rsx! {
        section { class: "card quiz-card quiz-result",
            header { class: "card-header",
                h3 { "Тест завершён!" }
            }
            div { class: "card-body",
                p { class: "result-score", "{vm.score_label}" }
                p { class: "result-message", "{vm.message}" }
                span { class: "icon icon-large icon-{vm.icon}" }
                button {
                    class: "btn btn-primary btn-wide",
                    r#type: "button",
                    onclick: move |_| quiz.write().reset(),
                    "Пройти тест снова"
                }
            }
        }
    }
}
