use dioxus::prelude::*;
use quiz_core::model::AuthScreen;

use crate::context::AppContext;
use crate::views::{ErrorBanner, UiState, ViewError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    SignUp,
}

#[component]
pub fn LoginView() -> Element {
    rsx! { AuthForm { mode: AuthMode::Login } }
}

#[component]
pub fn SignUpView() -> Element {
    rsx! { AuthForm { mode: AuthMode::SignUp } }
}

#[component]
fn AuthForm(mode: AuthMode) -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let auth = ctx.auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let (title, subtitle, submit_label, switch_prompt, switch_label, switch_to) = match mode {
        AuthMode::Login => (
            "Welcome back",
            "Log in to continue studying.",
            "Log in",
            "New here?",
            "Create an account",
            AuthScreen::SignUp,
        ),
        AuthMode::SignUp => (
            "Create your account",
            "Start practicing in a minute.",
            "Sign up",
            "Already have an account?",
            "Log in",
            AuthScreen::Login,
        ),
    };

    let auth_for_submit = auth.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth_for_submit.clone();
        let entered = email();
        spawn(async move {
            let result = match mode {
                AuthMode::Login => auth.login(&entered).await,
                AuthMode::SignUp => auth.sign_up(&entered).await,
            };
            match result {
                Ok(_) => ui.refresh(),
                Err(err) => ui.fail(ViewError::from_auth(&err), err),
            }
        });
    };

    rsx! {
        div { class: "page auth-page",
            header { class: "view-header",
                h1 { class: "view-title", "{title}" }
                p { class: "view-subtitle", "{subtitle}" }
            }
            ErrorBanner {}
            form { class: "auth-form", onsubmit: on_submit,
                label { class: "field",
                    span { class: "field-label", "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { class: "field-label", "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
            }
            p { class: "auth-switch",
                "{switch_prompt} "
                button {
                    class: "btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        auth.show_screen(switch_to);
                        ui.refresh();
                    },
                    "{switch_label}"
                }
            }
        }
    }
}

/// Unlock screen shown when a persisted session is found at startup.
#[component]
pub fn PinView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let auth = ctx.auth();
    let mut pin = use_signal(String::new);
    let identity = auth.identity().unwrap_or_default();

    let auth_for_unlock = auth.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match auth_for_unlock.unlock(&pin()) {
            Ok(_) => {
                pin.set(String::new());
                ui.refresh();
            }
            Err(err) => ui.fail(ViewError::from_auth(&err), err),
        }
    };

    rsx! {
        div { class: "page auth-page pin-page",
            header { class: "view-header",
                h1 { class: "view-title", "Enter your PIN" }
                p { class: "view-subtitle", "Signed in as {identity}" }
            }
            ErrorBanner {}
            form { class: "auth-form", onsubmit: on_submit,
                input {
                    class: "pin-input",
                    r#type: "password",
                    inputmode: "numeric",
                    maxlength: "4",
                    placeholder: "••••",
                    value: "{pin}",
                    oninput: move |evt| pin.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Unlock" }
            }
            button {
                class: "btn-link",
                r#type: "button",
                onclick: move |_| {
                    let auth = auth.clone();
                    spawn(async move {
                        match auth.logout().await {
                            Ok(_) => ui.refresh(),
                            Err(err) => ui.fail(ViewError::from_auth(&err), err),
                        }
                    });
                },
                "Not you? Log out"
            }
        }
    }
}
