//! Page shell state: scroll flag, mobile menu and entrance gate.
//!
//! [`PageShell`] is a plain struct. Its fields are private and only change
//! through [`PageShell::handle`], so the browser event handlers are the single
//! writer. The Leptos layer keeps it in one `RwSignal` and derives every
//! visual decision from it through [`crate::variant`].

use tracing::debug;

use crate::content::Anchor;
use crate::variant::{Entrance, HeroElement, MenuIcon, NavbarVariant};

/// Vertical offset (px) past which the navbar switches to its compact form.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Whether a vertical scroll offset counts as "scrolled".
///
/// Strictly greater than the threshold; NaN and negative (overscroll)
/// offsets are not scrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Mobile menu state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Input events the shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellEvent {
    /// The shell finished its first paint
    Mounted,
    /// The viewport reported a new vertical offset
    Scrolled(f64),
    /// The hamburger / close button was activated
    MenuButton,
    /// An in-page navigation link was activated
    NavLink(Anchor),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageShell {
    scrolled: bool,
    menu: MenuState,
    loaded: bool,
}

impl PageShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Apply an event. Returns `true` when any flag changed.
    pub fn handle(&mut self, event: ShellEvent) -> bool {
        let before = self.clone();

        match event {
            ShellEvent::Mounted => {
                // one-way: never reverts for the lifetime of the shell
                self.loaded = true;
            }
            ShellEvent::Scrolled(offset) => {
                self.scrolled = is_scrolled(offset);
            }
            ShellEvent::MenuButton => {
                self.menu = self.menu.toggled();
            }
            ShellEvent::NavLink(anchor) => {
                if self.menu.is_open() {
                    debug!(section = anchor.id(), "closing mobile menu on navigation");
                }
                self.menu = MenuState::Closed;
            }
        }

        let changed = *self != before;
        if changed {
            debug!(?event, scrolled = self.scrolled, menu = ?self.menu, loaded = self.loaded, "shell state changed");
        }
        changed
    }

    pub fn navbar_variant(&self) -> NavbarVariant {
        NavbarVariant::for_scroll(self.scrolled)
    }

    /// Whether the full-screen overlay menu is mounted at all.
    pub fn menu_mounted(&self) -> bool {
        self.menu.is_open()
    }

    pub fn menu_icon(&self) -> MenuIcon {
        MenuIcon::for_menu(self.menu)
    }

    pub fn entrance(&self, element: HeroElement) -> Entrance {
        Entrance::for_element(element, self.loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn nan_and_overscroll_are_not_scrolled() {
        assert!(!is_scrolled(f64::NAN));
        assert!(!is_scrolled(-35.0));
    }

    #[test]
    fn scrolled_follows_every_observation() {
        let mut shell = PageShell::new();
        let offsets = [0.0, 21.0, 20.0, 300.0, 5.0, 21.0];
        for offset in offsets {
            shell.handle(ShellEvent::Scrolled(offset));
            assert_eq!(shell.scrolled(), offset > 20.0, "offset {offset}");
        }
    }

    #[test]
    fn repeated_scroll_on_same_side_reports_no_change() {
        let mut shell = PageShell::new();
        assert!(shell.handle(ShellEvent::Scrolled(50.0)));
        assert!(!shell.handle(ShellEvent::Scrolled(80.0)));
        assert!(shell.handle(ShellEvent::Scrolled(10.0)));
    }

    #[test]
    fn everything_starts_false() {
        let shell = PageShell::new();
        assert!(!shell.scrolled());
        assert!(!shell.loaded());
        assert_eq!(shell.menu(), MenuState::Closed);
        assert!(!shell.menu_mounted());
    }

    #[test]
    fn menu_button_toggles() {
        let mut shell = PageShell::new();
        shell.handle(ShellEvent::MenuButton);
        assert_eq!(shell.menu(), MenuState::Open);
        assert!(shell.menu_mounted());
        shell.handle(ShellEvent::MenuButton);
        assert_eq!(shell.menu(), MenuState::Closed);
        assert!(!shell.menu_mounted());
    }

    #[test]
    fn nav_link_closes_open_menu() {
        for anchor in Anchor::ALL {
            let mut shell = PageShell::new();
            shell.handle(ShellEvent::MenuButton);
            assert!(shell.handle(ShellEvent::NavLink(anchor)));
            assert_eq!(shell.menu(), MenuState::Closed);
        }
    }

    #[test]
    fn nav_link_while_closed_is_a_no_op() {
        let mut shell = PageShell::new();
        assert!(!shell.handle(ShellEvent::NavLink(Anchor::Pricing)));
        assert_eq!(shell.menu(), MenuState::Closed);
    }

    #[test]
    fn scrolling_does_not_touch_the_menu() {
        let mut shell = PageShell::new();
        shell.handle(ShellEvent::MenuButton);
        shell.handle(ShellEvent::Scrolled(500.0));
        shell.handle(ShellEvent::Scrolled(0.0));
        assert_eq!(shell.menu(), MenuState::Open);
    }

    #[test]
    fn loaded_flips_once_and_never_reverts() {
        let mut shell = PageShell::new();
        assert!(shell.handle(ShellEvent::Mounted));
        assert!(shell.loaded());
        assert!(!shell.handle(ShellEvent::Mounted));

        for event in [
            ShellEvent::Scrolled(100.0),
            ShellEvent::MenuButton,
            ShellEvent::NavLink(Anchor::Faq),
            ShellEvent::Scrolled(0.0),
        ] {
            shell.handle(event);
            assert!(shell.loaded());
        }
    }

    #[test]
    fn derived_views_track_state() {
        let mut shell = PageShell::new();
        assert_eq!(shell.navbar_variant(), NavbarVariant::Spacious);
        assert_eq!(shell.menu_icon(), MenuIcon::Hamburger);
        assert_eq!(shell.entrance(HeroElement::Title), Entrance::Hidden);

        shell.handle(ShellEvent::Scrolled(21.0));
        shell.handle(ShellEvent::MenuButton);
        shell.handle(ShellEvent::Mounted);

        assert_eq!(shell.navbar_variant(), NavbarVariant::Compact);
        assert_eq!(shell.menu_icon(), MenuIcon::Close);
        assert_ne!(shell.entrance(HeroElement::Title), Entrance::Hidden);
    }
}
