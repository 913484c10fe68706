//! Root component: owns the page shell and wires the scroll listener.

use leptos::prelude::*;
use tracing::info;

use crate::content::SiteContent;
use crate::scroll::{ScrollSource, ScrollSubscription, WindowScroll};
use crate::sections::*;
use crate::shell::{PageShell, ShellEvent};

#[component]
pub fn App(content: SiteContent, year: u32) -> impl IntoView {
    let shell = RwSignal::new(PageShell::new());

    Effect::new(move || attach_scroll(shell, WindowScroll));

    let SiteContent {
        brand,
        features,
        plans,
        faqs,
    } = content;

    view! {
        <div class="page">
            <Navbar shell=shell brand=brand.name.clone() />
            <main>
                <Hero shell=shell.read_only() hero_image=brand.hero_image.clone() />
                <FeaturesSection features=features brand=brand.name.clone() />
                <PricingSection plans=plans />
                <FaqSection faqs=faqs brand=brand.name.clone() />
                <CallToAction brand=brand.name.clone() />
            </main>
            <Footer brand=brand year=year />
        </div>
    }
}

/// Subscribe the shell to `source`, sync the current offset and start the
/// entrance. The listener is released when the current owner is cleaned up.
pub fn attach_scroll<S>(shell: RwSignal<PageShell>, source: S)
where
    S: ScrollSource + 'static,
    S::Handle: 'static,
{
    let subscription = ScrollSubscription::new(source, move |offset| {
        shell.maybe_update(|s| s.handle(ShellEvent::Scrolled(offset)));
    });
    let offset = subscription.offset();
    shell.maybe_update(|s| s.handle(ShellEvent::Scrolled(offset)));
    shell.maybe_update(|s| s.handle(ShellEvent::Mounted));
    info!("page shell mounted");

    let subscription = StoredValue::new_local(subscription);
    on_cleanup(move || subscription.update_value(|s| s.release()));
}

/// Minimal page shown when the bundled content fails validation.
#[component]
pub fn ContentErrorNotice(message: String) -> impl IntoView {
    view! {
        <main class="content-error" role="alert">
            <h1>"Something went wrong"</h1>
            <p>"This page could not be built from its content."</p>
            <pre>{message}</pre>
        </main>
    }
}
