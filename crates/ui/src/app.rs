use dioxus::prelude::*;
use dioxus_router::Router;

use grammar_core::{ProgressState, QuizState};

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // Session state lives above the router so switching tabs never resets it.
    use_context_provider(|| Signal::new(ProgressState::new()));
    use_context_provider(|| Signal::new(QuizState::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. The in-page header carries the course title.
        document::Title { "English Grammar" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
