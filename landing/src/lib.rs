//! # superside-landing
//!
//! Landing page for the SuperSide browser extension, built with
//! [Leptos](https://leptos.dev/) 0.8 in client-side rendering mode.
//!
//! Almost the whole page is static: a hero, a feature grid, a pricing table,
//! an FAQ accordion, a call to action and a footer, each rendered from the
//! content bundled in `content/site.json`. The interactive part is small and
//! kept out of the components so it can be tested natively:
//!
//! - [`shell`] - the page shell state (`scrolled`, mobile menu, `loaded`)
//!   and the events that change it
//! - [`variant`] - pure mapping from that state to visual variants
//! - [`scroll`] - the scroll listener and its one-shot release
//! - [`deferred`] - sections that load after the first paint
//!
//! ## Leptos components
//!
//! Stateless sections can be rendered to a string for inspection:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use superside_landing::sections::PricingTable;
//!
//! let html = view! { <PricingTable plans=plans /> }.to_html();
//! ```
//!
//! ---
//!
//! Developed by The SuperSide Team (c)2025

pub mod app;
pub mod content;
pub mod deferred;
pub mod error;
pub mod scroll;
pub mod sections;
pub mod shell;
pub mod telemetry;
pub mod variant;

pub use app::{App, ContentErrorNotice};
pub use content::SiteContent;
pub use error::{ContentError, LoadError};
