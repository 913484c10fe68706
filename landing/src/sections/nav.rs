use leptos::prelude::*;

use super::icons::{UiGlyph, UiIcon};
use super::ui::ShimmerButton;
use crate::content::Anchor;
use crate::shell::{PageShell, ShellEvent};
use crate::variant::MenuIcon;

/// Fixed floating navbar. Compact pill once the page is scrolled.
#[component]
pub fn Navbar(shell: RwSignal<PageShell>, brand: String) -> impl IntoView {
    let toggle_menu = move |_| {
        shell.maybe_update(|s| s.handle(ShellEvent::MenuButton));
    };

    view! {
        <div class="navbar-frame">
            <nav class=move || shell.with(|s| s.navbar_variant().class())>
                <div class="navbar-inner">
                    <a href="#" class="navbar-brand">
                        <UiGlyph icon=UiIcon::Chrome class="brand-icon" />
                        <span class="brand-name">{brand}</span>
                    </a>

                    <div class="navbar-links">
                        {Anchor::ALL
                            .into_iter()
                            .map(|anchor| view! { <NavLink shell=shell anchor=anchor class="nav-link" /> })
                            .collect_view()}
                        <ShimmerButton>"Add to Chrome"</ShimmerButton>
                    </div>

                    <button
                        class="menu-button"
                        aria-label=move || shell.with(|s| s.menu_icon().aria_label())
                        aria-expanded=move || shell.with(|s| s.menu().is_open()).to_string()
                        on:click=toggle_menu
                    >
                        {move || match shell.with(|s| s.menu_icon()) {
                            MenuIcon::Hamburger => view! { <UiGlyph icon=UiIcon::Menu /> },
                            MenuIcon::Close => view! { <UiGlyph icon=UiIcon::Close /> },
                        }}
                    </button>
                </div>
            </nav>
        </div>

        // Overlay is mounted only while the menu is open
        <Show when=move || shell.with(|s| s.menu_mounted())>
            <MobileMenu shell=shell />
        </Show>
    }
}

#[component]
fn MobileMenu(shell: RwSignal<PageShell>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            <div class="mobile-menu-inner">
                {Anchor::ALL
                    .into_iter()
                    .map(|anchor| view! { <NavLink shell=shell anchor=anchor class="mobile-link" /> })
                    .collect_view()}
                <ShimmerButton class="shimmer-button-wide">"Add to Chrome"</ShimmerButton>
            </div>
        </div>
    }
}

/// In-page link; activating it closes the mobile menu.
#[component]
fn NavLink(shell: RwSignal<PageShell>, anchor: Anchor, class: &'static str) -> impl IntoView {
    view! {
        <a
            href=anchor.href()
            class=class
            on:click=move |_| {
                shell.maybe_update(|s| s.handle(ShellEvent::NavLink(anchor)));
            }
        >
            {anchor.label()}
        </a>
    }
}
