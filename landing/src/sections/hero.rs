use leptos::prelude::*;

use super::icons::{UiGlyph, UiIcon};
use super::ui::{ShimmerButton, ShinyBadge};
use crate::shell::PageShell;
use crate::variant::HeroElement;

/// Hero with a staged entrance once the shell reports it has loaded.
#[component]
pub fn Hero(shell: ReadSignal<PageShell>, hero_image: String) -> impl IntoView {
    let entrance = move |element: HeroElement| shell.with(|s| s.entrance(element).class());

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=hero_image alt="Hero Background" class="hero-image" />
                <div class="hero-scrim"></div>
            </div>
            <div class="container hero-content">
                <ShinyBadge
                    class=move || entrance(HeroElement::Badge)
                    text="✨ Supercharge Your Browser"
                />
                <h1 class=move || format!("hero-title {}", entrance(HeroElement::Title))>
                    "Your All-in-One "
                    <span class="text-primary">"Productivity Sidebar"</span>
                </h1>
                <p class=move || format!("hero-subtitle {}", entrance(HeroElement::Subtitle))>
                    "Combine task management, tab organization, and calendar planning in one sleek interface, right inside Chrome."
                </p>
                <div class=move || format!("hero-actions {}", entrance(HeroElement::Actions))>
                    <ShimmerButton class="hero-cta">
                        "Add to Chrome "<span class="dash">"-"</span>" It's Free"
                    </ShimmerButton>
                    <button class="ghost-button">
                        "Watch Demo"
                        <UiGlyph icon=UiIcon::ChevronRight class="ghost-chevron" />
                    </button>
                </div>
            </div>
        </section>
    }
}
