use grammar_core::model::TopicId;
use grammar_core::{Catalog, ProgressState, QuizState};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_catalog};

#[test]
fn topics_view_smoke_renders_topic_cards() {
    let mut harness = setup_view_harness(ViewKind::Topics, ProgressState::new(), QuizState::new());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Времена глаголов"), "missing topic title in {html}");
    assert!(html.contains("Present Simple"), "missing rule name in {html}");
    assert!(
        html.contains("Отметить как изученное"),
        "missing toggle label in {html}"
    );
    assert!(!html.contains("badge-done"), "unexpected badge in {html}");
}

#[test]
fn topics_view_smoke_renders_completed_state() {
    let mut progress = ProgressState::new();
    progress.toggle(TopicId::new("tenses"));

    let mut harness = setup_view_harness(ViewKind::Topics, progress, QuizState::new());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("badge-done"), "missing badge in {html}");
    assert!(html.contains("Изучено"), "missing done label in {html}");
    // The other topics still offer the mark action.
    assert!(
        html.contains("Отметить как изученное"),
        "missing toggle label in {html}"
    );
}

#[test]
fn progress_card_smoke_renders_completion() {
    let mut progress = ProgressState::new();
    progress.toggle(TopicId::new("tenses"));
    progress.toggle(TopicId::new("articles"));

    let mut harness = setup_view_harness(ViewKind::Progress, progress, QuizState::new());
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Завершено тем: 2 из 4"),
        "missing completion label in {html}"
    );
    assert!(html.contains("50%"), "missing percent in {html}");
    assert!(html.contains("width: 50%"), "missing bar width in {html}");
}

#[test]
fn topics_view_smoke_renders_injected_catalog() {
    let catalog = Catalog::from_json(
        r#"{
            "topics": [
                {
                    "id": "phrasal-verbs",
                    "title": "Фразовые глаголы",
                    "icon": "lightbulb",
                    "rules": [
                        {
                            "name": "Look up",
                            "description": "искать информацию",
                            "examples": ["Look it up in a dictionary"],
                            "formula": "look + up + object"
                        }
                    ]
                }
            ],
            "questions": [
                {
                    "prompt": "Pick the phrasal verb",
                    "options": ["look up", "look", "up", "looking"],
                    "correct": 0,
                    "topic": "phrasal-verbs"
                }
            ]
        }"#,
    )
    .expect("test catalog");

    let mut harness = setup_view_harness_with_catalog(
        ViewKind::Topics,
        std::sync::Arc::new(catalog),
        ProgressState::new(),
        QuizState::new(),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Фразовые глаголы"), "missing topic in {html}");
    assert!(html.contains("Look up"), "missing rule in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, ProgressState::new(), QuizState::new());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Вопрос 1 из 4"), "missing counter in {html}");
    assert!(html.contains("goes"), "missing option in {html}");
    assert!(
        !html.contains("Следующий вопрос"),
        "next button before an answer in {html}"
    );
}

#[test]
fn quiz_view_smoke_renders_locked_answer_tones() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let mut quiz = QuizState::new();
    // Wrong answer on the first question: index 0, key is 1.
    quiz.select_answer(catalog.questions(), 0);

    let mut harness = setup_view_harness(ViewKind::Quiz, ProgressState::new(), quiz);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("option--incorrect"), "missing incorrect tone in {html}");
    assert!(html.contains("option--correct"), "missing correct tone in {html}");
    assert!(html.contains("Следующий вопрос"), "missing next button in {html}");
}

#[test]
fn quiz_view_smoke_renders_result_panel() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let mut quiz = QuizState::new();
    for choice in [1, 1, 1, 2] {
        quiz.select_answer(catalog.questions(), choice);
        quiz.advance(catalog.questions());
    }

    let mut harness = setup_view_harness(ViewKind::Quiz, ProgressState::new(), quiz);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Тест завершён!"), "missing result title in {html}");
    assert!(html.contains("4/4"), "missing score in {html}");
    assert!(html.contains("icon-trophy"), "missing tier icon in {html}");
    assert!(
        html.contains("Пройти тест снова"),
        "missing retry button in {html}"
    );
}
