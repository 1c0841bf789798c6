use dioxus::prelude::*;
use crate::context::AppContext;
use crate::routes::Shell;
use crate::views::UiState;

#[component]
pub fn App() -> Element {
    let start = use_context::<AppContext>().start_screen();
    use_context_provider(|| UiState::new(start));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Quiz Trainer" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}
