//! Inline stroke icons (24x24 viewBox).

use leptos::prelude::*;

use crate::content::Icon;

/// Icons used by the page chrome, as opposed to content icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiIcon {
    Chrome,
    Menu,
    Close,
    ChevronRight,
    ArrowRight,
    CheckCircle,
}

pub fn content_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Layout => &["M3 3h18v18H3z", "M3 9h18", "M9 21V9"],
        Icon::Calendar => &["M8 2v4", "M16 2v4", "M3 6h18v16H3z", "M3 10h18"],
        Icon::Brain => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
        ],
        Icon::Sparkles => &[
            "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
        ],
        Icon::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
    }
}

pub fn ui_paths(icon: UiIcon) -> &'static [&'static str] {
    match icon {
        UiIcon::Chrome => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M21.17 8H12",
            "M3.95 6.06 8.54 14",
            "M10.88 21.94 15.46 14",
        ],
        UiIcon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        UiIcon::Close => &["M18 6 6 18", "m6 6 12 12"],
        UiIcon::ChevronRight => &["m9 18 6-6-6-6"],
        UiIcon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        UiIcon::CheckCircle => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "m9 12 2 2 4-4"],
    }
}

#[component]
pub fn Svg(paths: &'static [&'static str], #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths
                .iter()
                .map(|&d| view! { <path d=d /> })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn ContentIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Svg paths=content_paths(icon) class=class /> }
}

#[component]
pub fn UiGlyph(icon: UiIcon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Svg paths=ui_paths(icon) class=class /> }
}
