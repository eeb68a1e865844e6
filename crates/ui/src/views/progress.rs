use dioxus::prelude::*;

use grammar_core::ProgressState;

use crate::context::AppContext;
use crate::vm::map_progress;

/// Completion summary shown above the tab bar on every route.
#[component]
pub fn ProgressCard() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_context::<Signal<ProgressState>>();
    let catalog = ctx.catalog();
    let vm = map_progress(&catalog, &progress.read());

    rsx! {
        section { class: "card progress-card",
            header { class: "card-header",
                h2 {
                    span { class: "icon icon-trending-up" }
                    "Прогресс изучения"
                }
                p { class: "card-subtitle", "{vm.completed_label}" }
            }
            div { class: "card-body",
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {vm.percent}%;" }
                }
                p { class: "progress-percent", "{vm.percent_label}" }
            }
        }
    }
}
