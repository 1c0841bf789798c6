use dioxus::prelude::*;
use quiz_core::navigation::Screen;

use crate::context::AppContext;
use crate::views::UiState;
use crate::vm::{AttemptRowVm, map_attempt_rows};

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let history = ctx.history();
    let rows = map_attempt_rows(&history.attempts());
    let stats = history.stats();

    rsx! {
        div { class: "page history-page",
            header { class: "view-header view-header--with-back",
                button {
                    class: "btn-link back-link",
                    r#type: "button",
                    onclick: move |_| ui.go(Screen::Settings),
                    "‹ Back"
                }
                h2 { class: "view-title", "Quiz history" }
                if stats.attempts > 0 {
                    p { class: "view-subtitle",
                        "{stats.attempts} attempts · average {stats.average_percentage}% · best {stats.best_percentage}%"
                    }
                }
            }
            AttemptList { rows, empty_message: "No quizzes taken yet." }
        }
    }
}

#[component]
pub fn AttemptList(rows: Vec<AttemptRowVm>, empty_message: &'static str) -> Element {
    rsx! {
        if rows.is_empty() {
            p { class: "empty-state", "{empty_message}" }
        } else {
            ul { class: "attempt-list",
                for row in rows {
                    li { class: "attempt-row",
                        div { class: "attempt-main",
                            span { class: "attempt-title", "{row.title}" }
                            span { class: "attempt-date", "{row.date_label}" }
                        }
                        div { class: "attempt-score",
                            span { "{row.score_label}" }
                            span {
                                class: if row.passed { "attempt-pct attempt-pct--pass" } else { "attempt-pct attempt-pct--fail" },
                                "{row.percentage_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
