use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::builtin_catalog;
use quiz_core::navigation::Screen;
use quiz_core::time::fixed_clock;
use services::AppServices;
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::Shell;
use crate::views::UiState;

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<AppServices>,
    screen: Screen,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| UiState::new(props.screen));
    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn new(services: AppServices, screen: Screen) -> Self {
        let services = Arc::new(services);
        let dom = VirtualDom::new_with_props(
            HarnessRoot,
            HarnessProps {
                app: Arc::clone(&services),
                screen,
            },
        );
        Self { dom, services }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Rebuild and render in one step.
    pub fn html(&mut self) -> String {
        self.rebuild();
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn bootstrap(storage: Storage) -> AppServices {
    AppServices::bootstrap(storage, builtin_catalog().expect("catalog"), fixed_clock())
        .await
        .expect("bootstrap services")
}

/// Services over fresh in-memory storage with a logged-in user.
pub async fn logged_in(storage: Storage) -> AppServices {
    let services = bootstrap(storage).await;
    services
        .auth()
        .login("ada@example.com")
        .await
        .expect("login");
    services
}
