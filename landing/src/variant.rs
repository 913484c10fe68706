//! Visual variant selection.
//!
//! Every conditional class decision on the page lives here as a pure
//! function from state to a small enum, and from the enum to its class set.
//! Components never branch on raw flags themselves.

use crate::shell::MenuState;

/// Treatment of the fixed navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarVariant {
    /// Top of page: roomy, transparent bar
    Spacious,
    /// Scrolled: compact bordered pill with backdrop
    Compact,
}

impl NavbarVariant {
    pub fn for_scroll(scrolled: bool) -> Self {
        if scrolled {
            NavbarVariant::Compact
        } else {
            NavbarVariant::Spacious
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavbarVariant::Spacious => "navbar navbar-spacious",
            NavbarVariant::Compact => "navbar navbar-compact floating-navbar",
        }
    }
}

/// Icon shown on the mobile menu button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Hamburger,
    Close,
}

impl MenuIcon {
    pub fn for_menu(menu: MenuState) -> Self {
        match menu {
            MenuState::Closed => MenuIcon::Hamburger,
            MenuState::Open => MenuIcon::Close,
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            MenuIcon::Hamburger => "Open menu",
            MenuIcon::Close => "Close menu",
        }
    }
}

/// Hero elements that take part in the staged entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroElement {
    Badge,
    Title,
    Subtitle,
    Actions,
}

/// Slot in the staged entrance; each maps to one `animate-delay-*` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    First,
    Second,
    Third,
}

/// Entrance animation state of a single element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Before first paint completes: fully transparent
    Hidden,
    FadeIn { delay: Stage },
    ScaleIn { delay: Stage },
}

impl Entrance {
    pub fn for_element(element: HeroElement, loaded: bool) -> Self {
        if !loaded {
            return Entrance::Hidden;
        }
        match element {
            HeroElement::Badge => Entrance::FadeIn { delay: Stage::First },
            HeroElement::Title => Entrance::FadeIn { delay: Stage::Second },
            HeroElement::Subtitle => Entrance::FadeIn { delay: Stage::Third },
            HeroElement::Actions => Entrance::ScaleIn { delay: Stage::Third },
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Entrance::Hidden => "opacity-0",
            Entrance::FadeIn { delay: Stage::First } => "animate-fade-in animate-delay-1",
            Entrance::FadeIn { delay: Stage::Second } => "animate-fade-in animate-delay-2",
            Entrance::FadeIn { delay: Stage::Third } => "animate-fade-in animate-delay-3",
            Entrance::ScaleIn { delay: Stage::First } => "animate-scale-in animate-delay-1",
            Entrance::ScaleIn { delay: Stage::Second } => "animate-scale-in animate-delay-2",
            Entrance::ScaleIn { delay: Stage::Third } => "animate-scale-in animate-delay-3",
        }
    }
}

/// Visual treatment of a pricing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanVariant {
    Default,
    Popular,
}

impl PlanVariant {
    pub const POPULAR_MARKER: &'static str = "Most Popular";

    pub fn for_plan(popular: bool) -> Self {
        if popular {
            PlanVariant::Popular
        } else {
            PlanVariant::Default
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            PlanVariant::Default => "card plan-card",
            PlanVariant::Popular => "card plan-card plan-card-popular",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            PlanVariant::Default => "shimmer-button plan-cta plan-cta-outline",
            PlanVariant::Popular => "shimmer-button plan-cta plan-cta-primary",
        }
    }

    /// Badge text, present only for the popular tier.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            PlanVariant::Default => None,
            PlanVariant::Popular => Some(Self::POPULAR_MARKER),
        }
    }
}

/// Entrance delay (ms) of the n-th FAQ item.
pub fn faq_stagger_ms(index: usize) -> usize {
    index * 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn navbar_variant_from_scroll_flag() {
        assert_eq!(NavbarVariant::for_scroll(false), NavbarVariant::Spacious);
        assert_eq!(NavbarVariant::for_scroll(true), NavbarVariant::Compact);
        assert!(NavbarVariant::Compact.class().contains("navbar-compact"));
        assert!(!NavbarVariant::Spacious.class().contains("navbar-compact"));
    }

    #[test]
    fn entrance_hidden_until_loaded() {
        for element in [
            HeroElement::Badge,
            HeroElement::Title,
            HeroElement::Subtitle,
            HeroElement::Actions,
        ] {
            assert_eq!(Entrance::for_element(element, false), Entrance::Hidden);
            assert_eq!(Entrance::for_element(element, false).class(), "opacity-0");
        }
    }

    #[test]
    fn entrance_stages_after_load() {
        let classes: Vec<&str> = [
            HeroElement::Badge,
            HeroElement::Title,
            HeroElement::Subtitle,
            HeroElement::Actions,
        ]
        .into_iter()
        .map(|e| Entrance::for_element(e, true).class())
        .collect();

        assert_eq!(
            classes,
            vec![
                "animate-fade-in animate-delay-1",
                "animate-fade-in animate-delay-2",
                "animate-fade-in animate-delay-3",
                "animate-scale-in animate-delay-3",
            ]
        );
    }

    #[test]
    fn each_stage_has_its_own_delay_class() {
        let stages = [Stage::First, Stage::Second, Stage::Third];
        for (n, stage) in stages.into_iter().enumerate() {
            let delay = format!("animate-delay-{}", n + 1);
            let fade = Entrance::FadeIn { delay: stage }.class();
            let scale = Entrance::ScaleIn { delay: stage }.class();
            assert_eq!(fade, format!("animate-fade-in {delay}"));
            assert_eq!(scale, format!("animate-scale-in {delay}"));
        }
    }

    #[test]
    fn plan_variant_from_popular_flag() {
        assert_eq!(PlanVariant::for_plan(true), PlanVariant::Popular);
        assert_eq!(PlanVariant::for_plan(false), PlanVariant::Default);
        assert_eq!(PlanVariant::Popular.marker(), Some("Most Popular"));
        assert_eq!(PlanVariant::Default.marker(), None);
        assert_ne!(
            PlanVariant::Popular.card_class(),
            PlanVariant::Default.card_class()
        );
    }

    #[test]
    fn menu_icon_follows_state() {
        assert_eq!(MenuIcon::for_menu(MenuState::Closed), MenuIcon::Hamburger);
        assert_eq!(MenuIcon::for_menu(MenuState::Open), MenuIcon::Close);
    }

    #[test]
    fn faq_items_are_staggered() {
        let delays: Vec<usize> = (0..4).map(faq_stagger_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }
}
