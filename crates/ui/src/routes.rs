use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ProgressCard, QuizView, TopicsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TopicsView)] Topics {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                span { class: "icon icon-book-open" }
                div {
                    h1 { "English Grammar" }
                    p { class: "subtitle", "Образовательный проект для 9 класса" }
                }
            }
            main { class: "content",
                ProgressCard {}
                TabBar {}
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "Образовательный проект по английскому языку • 9 класс • 2025" }
            }
        }
    }
}

#[component]
fn TabBar() -> Element {
    rsx! {
        nav { class: "tabs",
            Link { to: Route::Topics {}, class: "tab",
                span { class: "icon icon-library" }
                "Темы"
            }
            Link { to: Route::Quiz {}, class: "tab",
                span { class: "icon icon-brain" }
                "Тест"
            }
        }
    }
}
