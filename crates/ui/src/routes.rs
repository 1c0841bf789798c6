use dioxus::prelude::*;
use quiz_core::navigation::{AppView, NavState, Screen};

use crate::context::AppContext;
use crate::views::{
    HistoryView, HomeView, LibraryView, LoginView, PinView, QuizView, ResultsView, SettingsView,
    SignUpView, TabIcon, UiState,
};

/// Current routing inputs, read from the services.
#[must_use]
pub fn nav_state(ctx: &AppContext, screen: Screen) -> NavState {
    let auth = ctx.auth();
    let flow = ctx.quiz_flow();
    NavState {
        auth: auth.state(),
        auth_screen: auth.screen(),
        has_active_quiz: flow.has_active_quiz(),
        has_results: flow.has_results(),
        screen,
    }
}

/// Picks the view for the current auth, quiz and tab state.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let nav = nav_state(&ctx, ui.screen());
    let view = nav.resolve();
    let show_nav = matches!(view, AppView::Screen(_)) && nav.shows_nav_bar();

    rsx! {
        div { class: "shell",
            main { class: "content",
                match view {
                    AppView::Login => rsx! { LoginView {} },
                    AppView::SignUp => rsx! { SignUpView {} },
                    AppView::Pin => rsx! { PinView {} },
                    AppView::Results => rsx! { ResultsView {} },
                    AppView::Quiz => rsx! { QuizView {} },
                    AppView::Screen(Screen::Home) => rsx! { HomeView {} },
                    AppView::Screen(Screen::Library) => rsx! { LibraryView {} },
                    AppView::Screen(Screen::Settings) => rsx! { SettingsView {} },
                    AppView::Screen(Screen::History) => rsx! { HistoryView {} },
                }
            }
            if show_nav {
                BottomNav { active: nav.screen }
            }
        }
    }
}

#[component]
fn BottomNav(active: Screen) -> Element {
    let ui = use_context::<UiState>();
    rsx! {
        nav { class: "bottom-nav",
            for tab in Screen::TABS {
                button {
                    key: "{tab}",
                    class: if tab == active { "nav-tab nav-tab--active" } else { "nav-tab" },
                    r#type: "button",
                    onclick: move |_| ui.go(tab),
                    span { class: "nav-icon", TabIcon { screen: tab } }
                    span { class: "nav-label", "{tab.label()}" }
                }
            }
        }
    }
}
