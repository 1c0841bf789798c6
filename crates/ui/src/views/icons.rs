use dioxus::prelude::*;
use quiz_core::builtin::HEARTBEAT_ICON;
use quiz_core::navigation::Screen;

const BOOK_PATH: &str = "M4 5a2 2 0 0 1 2-2h13v16H6a2 2 0 0 0-2 2zM4 21V5";
const HEARTBEAT_PATH: &str = "M3 12h4l2-5 4 10 2-5h6";

#[component]
pub fn SubjectIcon(name: String) -> Element {
    let path = if name == HEARTBEAT_ICON {
        HEARTBEAT_PATH
    } else {
        BOOK_PATH
    };
    rsx! { IconSvg { path } }
}

#[component]
pub fn TabIcon(screen: Screen) -> Element {
    let path = match screen {
        Screen::Home => "M3 11l9-8 9 8v10h-6v-6H9v6H3z",
        Screen::Library => BOOK_PATH,
        Screen::Settings => "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM12 2v3M12 19v3M2 12h3M19 12h3",
        Screen::History => "M12 6v6l4 2M3 12a9 9 0 1 0 3-6.7L3 8",
    };
    rsx! { IconSvg { path } }
}

#[component]
fn IconSvg(path: &'static str) -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.7",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: path }
        }
    }
}
