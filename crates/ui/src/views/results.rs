use dioxus::prelude::*;
use quiz_core::navigation::Screen;

use crate::context::AppContext;
use crate::views::{ErrorBanner, UiState, ViewError};
use crate::vm::ResultsVm;

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let flow = ctx.quiz_flow();
    let Some(vm) = flow.results().as_ref().map(ResultsVm::from_results) else {
        return rsx! {
            div { class: "page results-page",
                p { class: "empty-state", "No results to show." }
            }
        };
    };

    let flow_for_leave = flow.clone();

    rsx! {
        div { class: "page results-page",
            header { class: "view-header",
                h2 { class: "view-title", "{vm.headline}" }
                p { class: "view-subtitle", "{vm.title}" }
            }
            ErrorBanner {}
            if vm.timed_out {
                p { class: "results-note", "Time ran out before you finished." }
            }
            div { class: "results-score",
                span { class: "results-score-value", "{vm.score_label}" }
                span { class: "results-score-pct", "{vm.percentage_label}" }
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let flow = flow.clone();
                        spawn(async move {
                            match flow.restart().await {
                                Ok(_) => ui.refresh(),
                                Err(err) => ui.fail(ViewError::from_quiz_flow(&err), err),
                            }
                        });
                    },
                    "Try again"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        flow_for_leave.leave_results();
                        ui.go(Screen::Library);
                    },
                    "Back to library"
                }
            }
        }
    }
}
