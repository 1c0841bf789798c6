use dioxus::prelude::*;
use quiz_core::model::QuizId;

use crate::context::AppContext;
use crate::views::{ErrorBanner, SubjectIcon, UiState, ViewError};
use crate::vm::map_subject_cards;

#[component]
pub fn LibraryView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let flow = ctx.quiz_flow();
    let cards = map_subject_cards(&flow.catalog());
    let mut search = use_signal(String::new);
    let mut expanded = use_signal(|| None::<String>);

    let query = search().trim().to_lowercase();
    let visible = cards
        .into_iter()
        .filter(|card| query.is_empty() || card.name.to_lowercase().contains(&query))
        .collect::<Vec<_>>();

    let start = use_callback(move |quiz_id: String| {
        let flow = flow.clone();
        spawn(async move {
            match flow.start_quiz(&QuizId::new(quiz_id)).await {
                Ok(_) => ui.refresh(),
                Err(err) => ui.fail(ViewError::from_quiz_flow(&err), err),
            }
        });
    });

    rsx! {
        div { class: "page library-page",
            header { class: "view-header",
                h2 { class: "view-title", "Library" }
                p { class: "view-subtitle", "Choose a subject to see its quizzes." }
            }
            ErrorBanner {}
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search subjects",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
            if visible.is_empty() {
                p { class: "empty-state", "No subjects match that search." }
            }
            ul { class: "subject-list",
                for card in visible {
                    li { key: "{card.id}", class: "subject-card",
                        button {
                            class: "subject-header",
                            r#type: "button",
                            disabled: card.quizzes.is_empty(),
                            onclick: {
                                let id = card.id.clone();
                                move |_| {
                                    if expanded().as_deref() == Some(id.as_str()) {
                                        expanded.set(None);
                                    } else {
                                        expanded.set(Some(id.clone()));
                                    }
                                }
                            },
                            span { class: "subject-icon", SubjectIcon { name: card.icon.clone() } }
                            span { class: "subject-name", "{card.name}" }
                            span { class: "subject-count", "{card.quiz_count_label}" }
                        }
                        if expanded().as_deref() == Some(card.id.as_str()) {
                            ul { class: "quiz-list",
                                for quiz in card.quizzes.iter() {
                                    li { key: "{quiz.id}", class: "quiz-item",
                                        div { class: "quiz-item-text",
                                            span { class: "quiz-title", "{quiz.title}" }
                                            span { class: "quiz-detail", "{quiz.detail_label}" }
                                        }
                                        button {
                                            class: "btn btn-primary",
                                            r#type: "button",
                                            onclick: {
                                                let id = quiz.id.clone();
                                                move |_| start.call(id.clone())
                                            },
                                            "Start"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
