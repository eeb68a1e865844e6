use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use grammar_core::{Catalog, ProgressState, QuizState};

use crate::context::{UiApp, build_app_context};
use crate::views::{ProgressCard, QuizView, TopicsView};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Topics,
    Quiz,
    Progress,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    progress: ProgressState,
    quiz: QuizState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(props.app.as_ref()));
    use_context_provider(|| Signal::new(props.progress.clone()));
    use_context_provider(|| Signal::new(props.quiz.clone()));

    match props.view {
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Progress => rsx! { ProgressCard {} },
    }
}

pub struct Harness {
    pub dom: VirtualDom,
}

impl Harness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Builds a harness over the shipped catalog with pre-seeded session state.
pub fn setup_view_harness(view: ViewKind, progress: ProgressState, quiz: QuizState) -> Harness {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    setup_view_harness_with_catalog(view, catalog, progress, quiz)
}

pub fn setup_view_harness_with_catalog(
    view: ViewKind,
    catalog: Arc<Catalog>,
    progress: ProgressState,
    quiz: QuizState,
) -> Harness {
    let app = Arc::new(TestApp { catalog });
    let dom = VirtualDom::new_with_props(
        ViewHarness,
        ViewHarnessProps {
            app,
            view,
            progress,
            quiz,
        },
    );

    Harness { dom }
}
