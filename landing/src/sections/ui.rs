//! Small presentational primitives shared by the sections.

use leptos::prelude::*;

use super::icons::{UiGlyph, UiIcon};

/// Button with the moving highlight sweep. Purely visual.
#[component]
pub fn ShimmerButton(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <button class=format!("shimmer-button {class}")>
            <span class="shimmer-sweep" aria-hidden="true"></span>
            <span class="shimmer-label">{children()}</span>
        </button>
    }
}

/// Rounded pill with animated shiny text and a trailing arrow.
#[component]
pub fn ShinyBadge(
    class: impl Fn() -> &'static str + Send + Sync + 'static,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class=move || format!("shiny-badge {}", class())>
            <span class="shiny-text">
                <span>{text}</span>
                <UiGlyph icon=UiIcon::ArrowRight class="shiny-arrow" />
            </span>
        </div>
    }
}
