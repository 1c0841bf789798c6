use std::time::Duration;

use dioxus::prelude::*;
use services::{QuizFlowError, StepOutcome};

use crate::context::AppContext;
use crate::views::{ErrorBanner, UiState, ViewError};
use crate::vm::QuizScreenVm;

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let flow = ctx.quiz_flow();

    // Countdown for timed quizzes. Runs while this view is mounted and stops
    // once the attempt leaves the in-progress state.
    let flow_for_timer = flow.clone();
    use_future(move || {
        let flow = flow_for_timer.clone();
        async move {
            let timed = flow
                .active_view()
                .is_some_and(|view| view.time_left.is_some());
            if !timed {
                return;
            }
            loop {
                tokio::time::sleep(TICK).await;
                if !flow.has_active_quiz() {
                    break;
                }
                match flow.tick().await {
                    Ok(StepOutcome::Continue) => ui.refresh(),
                    Ok(StepOutcome::Completed(_)) => {
                        ui.refresh();
                        break;
                    }
                    // An answer finished the quiz while this tick was queued.
                    Err(QuizFlowError::NoActiveQuiz) => break,
                    Err(err) => {
                        ui.fail(ViewError::from_quiz_flow(&err), err);
                        break;
                    }
                }
            }
        }
    });

    let flow_for_answer = flow.clone();
    let answer = use_callback(move |selected: usize| {
        let flow = flow_for_answer.clone();
        spawn(async move {
            match flow.answer(selected).await {
                Ok(_) => ui.refresh(),
                Err(err) => ui.fail(ViewError::from_quiz_flow(&err), err),
            }
        });
    });

    let Some(vm) = flow.active_view().as_ref().map(QuizScreenVm::from_view) else {
        return rsx! {
            div { class: "page quiz-page",
                p { class: "empty-state", "No quiz in progress." }
            }
        };
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                button {
                    class: "btn-link quiz-quit",
                    r#type: "button",
                    onclick: move |_| {
                        let flow = flow.clone();
                        spawn(async move {
                            match flow.abandon().await {
                                Ok(()) => ui.refresh(),
                                Err(err) => ui.fail(ViewError::from_quiz_flow(&err), err),
                            }
                        });
                    },
                    "✕ Quit"
                }
                h2 { class: "quiz-title", "{vm.title}" }
                if let Some(timer) = vm.timer_label.as_ref() {
                    span {
                        class: if vm.timer_urgent { "quiz-timer quiz-timer--urgent" } else { "quiz-timer" },
                        "{timer}"
                    }
                }
            }
            ErrorBanner {}
            div { class: "quiz-progress",
                span { class: "quiz-progress-label", "{vm.progress_label}" }
                div { class: "quiz-progress-track",
                    div { class: "quiz-progress-fill", style: "width: {vm.progress_pct}%" }
                }
            }
            p { class: "quiz-question", "{vm.question}" }
            div { class: "quiz-answers",
                for (idx, text) in vm.answers.iter().enumerate() {
                    button {
                        key: "{idx}",
                        class: "btn quiz-answer",
                        r#type: "button",
                        onclick: move |_| answer.call(idx),
                        "{text}"
                    }
                }
            }
        }
    }
}
