// Landing page sections
// Developed by The SuperSide Team (c)2025

mod cta;
mod deferred;
mod faq;
mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod pricing;
mod ui;

pub use cta::CallToAction;
pub use deferred::{SectionFallback, SectionPlaceholder, deferred_slot, deferred_view};
pub use faq::{AccordionState, FaqList, FaqSection};
pub use features::{FeatureGrid, FeaturesSection};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{ContentIcon, UiGlyph, UiIcon};
pub use nav::Navbar;
pub use pricing::{PricingSection, PricingTable};
pub use ui::{ShimmerButton, ShinyBadge};
