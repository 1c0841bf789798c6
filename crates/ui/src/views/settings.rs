use dioxus::prelude::*;
use quiz_core::model::UserProfileDraft;
use quiz_core::navigation::Screen;

use crate::context::AppContext;
use crate::views::{ErrorBanner, UiState, ViewError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileField {
    Name,
    Email,
    Phone,
    Year,
    College,
    Country,
}

impl ProfileField {
    const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Year,
        ProfileField::College,
        ProfileField::Country,
    ];

    fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Year => "Year of study",
            ProfileField::College => "College",
            ProfileField::Country => "Country",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Phone => "tel",
            _ => "text",
        }
    }

    fn get(self, draft: &UserProfileDraft) -> &str {
        match self {
            ProfileField::Name => &draft.name,
            ProfileField::Email => &draft.email,
            ProfileField::Phone => &draft.phone,
            ProfileField::Year => &draft.year,
            ProfileField::College => &draft.college,
            ProfileField::Country => &draft.country,
        }
    }

    fn set(self, draft: &mut UserProfileDraft, value: String) {
        let slot = match self {
            ProfileField::Name => &mut draft.name,
            ProfileField::Email => &mut draft.email,
            ProfileField::Phone => &mut draft.phone,
            ProfileField::Year => &mut draft.year,
            ProfileField::College => &mut draft.college,
            ProfileField::Country => &mut draft.country,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    ui.track();

    let profile_service = ctx.profile();
    let history = ctx.history();
    let auth = ctx.auth();
    let stats = history.stats();

    let initial = profile_service.profile();
    let mut draft = use_signal(|| UserProfileDraft::from(&initial));
    let mut save_state = use_signal(|| SaveState::Idle);
    let mut confirm_clear = use_signal(|| false);

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let profile_service = profile_service.clone();
        let submitted = draft();
        save_state.set(SaveState::Saving);
        spawn(async move {
            match profile_service.update(submitted).await {
                Ok(saved) => {
                    draft.set(UserProfileDraft::from(&saved));
                    save_state.set(SaveState::Saved);
                    ui.refresh();
                }
                Err(err) => {
                    save_state.set(SaveState::Idle);
                    ui.fail(ViewError::Storage, err);
                }
            }
        });
    };

    let history_for_clear = history.clone();
    let on_clear = move |_: MouseEvent| {
        let history = history_for_clear.clone();
        confirm_clear.set(false);
        spawn(async move {
            match history.clear().await {
                Ok(()) => ui.refresh(),
                Err(err) => ui.fail(ViewError::Storage, err),
            }
        });
    };

    let on_logout = move |_: MouseEvent| {
        let auth = auth.clone();
        spawn(async move {
            match auth.logout().await {
                Ok(_) => ui.go(Screen::Home),
                Err(err) => ui.fail(ViewError::from_auth(&err), err),
            }
        });
    };

    let fields = ProfileField::ALL.iter().map(move |&field| {
        let value = field.get(&draft.read()).to_string();
        rsx! {
            label { key: "{field.label()}", class: "field",
                span { class: "field-label", "{field.label()}" }
                input {
                    r#type: field.input_type(),
                    value: "{value}",
                    oninput: move |evt| {
                        field.set(&mut draft.write(), evt.value());
                        save_state.set(SaveState::Idle);
                    },
                }
            }
        }
    });

    rsx! {
        div { class: "page settings-page",
            header { class: "view-header",
                h2 { class: "view-title", "Settings" }
            }
            ErrorBanner {}
            section { class: "card",
                h3 { class: "card-title", "Profile" }
                form { class: "profile-form", onsubmit: on_save,
                    {fields}
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: save_state() == SaveState::Saving,
                        "Save profile"
                    }
                    if save_state() == SaveState::Saved {
                        span { class: "save-note", "Saved" }
                    }
                }
            }
            section { class: "card",
                h3 { class: "card-title", "Progress" }
                dl { class: "stats",
                    dt { "Quizzes taken" }
                    dd { "{stats.attempts}" }
                    dt { "Average score" }
                    dd { "{stats.average_percentage}%" }
                    dt { "Best score" }
                    dd { "{stats.best_percentage}%" }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| ui.go(Screen::History),
                    "View history"
                }
                if confirm_clear() {
                    div { class: "confirm",
                        p { "Delete all quiz history? This cannot be undone." }
                        button { class: "btn btn-danger", r#type: "button", onclick: on_clear, "Delete" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| confirm_clear.set(false),
                            "Cancel"
                        }
                    }
                } else {
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        disabled: stats.attempts == 0,
                        onclick: move |_| confirm_clear.set(true),
                        "Clear history"
                    }
                }
            }
            section { class: "card",
                button { class: "btn btn-secondary", r#type: "button", onclick: on_logout, "Log out" }
            }
        }
    }
}
