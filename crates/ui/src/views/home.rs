use dioxus::prelude::*;
use quiz_core::navigation::Screen;

use crate::context::AppContext;
use crate::views::{AttemptList, ErrorBanner, UiState, ViewError};
use crate::vm::{SavedProgressVm, map_attempt_rows};

const RECENT_ATTEMPTS: usize = 3;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let flow = ctx.quiz_flow();
    let profile = ctx.profile().profile();
    let greeting_name = if profile.name().is_empty() {
        ctx.auth().identity().unwrap_or_default()
    } else {
        profile.name().to_string()
    };
    let saved = flow
        .saved_progress()
        .and_then(|saved| SavedProgressVm::from_saved(&saved, &flow.catalog()));
    let recent = map_attempt_rows(&ctx.history().recent(RECENT_ATTEMPTS));

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Hello, {greeting_name}" }
                p { class: "view-subtitle", "Ready for today's practice?" }
            }
            ErrorBanner {}
            if let Some(saved) = saved {
                section { class: "card continue-card",
                    h3 { class: "card-title", "Continue where you left off" }
                    p { class: "continue-quiz", "{saved.title}" }
                    p { class: "continue-meta",
                        "{saved.progress_label}"
                        if let Some(timer) = saved.timer_label {
                            span { class: "continue-timer", " · {timer}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let flow = flow.clone();
                            spawn(async move {
                                match flow.resume_saved().await {
                                    Ok(_) => ui.refresh(),
                                    Err(err) => ui.fail(ViewError::from_quiz_flow(&err), err),
                                }
                            });
                        },
                        "Continue"
                    }
                }
            }
            section { class: "card",
                h3 { class: "card-title", "Browse the library" }
                p { "Pick a subject and start a quiz." }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| ui.go(Screen::Library),
                    "Open library"
                }
            }
            section { class: "recent",
                h3 { class: "section-title", "Recent activity" }
                AttemptList {
                    rows: recent,
                    empty_message: "No quizzes taken yet. Your results will show up here.",
                }
            }
        }
    }
}
