//! Leptos glue for deferred sections.

use leptos::prelude::*;
use tracing::debug;

use crate::deferred::{AfterFirstPaint, DeferredSlot, FALLBACK_MESSAGE, LoadPhase, fetch};

/// Create a pending slot for `section` and start its load once mounted.
///
/// The load is spawned from an effect, so it never runs during the initial
/// render. If the section is torn down before the load finishes, the result
/// is dropped.
pub fn deferred_slot<T>(section: &'static str, content: T) -> RwSignal<DeferredSlot<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let slot = RwSignal::new(DeferredSlot::pending(section));

    Effect::new(move || {
        let loader = AfterFirstPaint::new(section, content.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch(section, loader).await;
            if slot.try_update(|s| s.resolve(result)).is_none() {
                debug!(section, "section unmounted before its load finished");
            }
        });
    });

    slot
}

/// Placeholder, content or fallback for a slot; never more than one.
pub fn deferred_view<T, V>(
    slot: RwSignal<DeferredSlot<T>>,
    placeholder: &'static str,
    render: impl Fn(T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        slot.with(|s| match s.phase() {
            LoadPhase::Pending => view! { <SectionPlaceholder class=placeholder /> }.into_any(),
            LoadPhase::Ready(content) => render(content.clone()).into_any(),
            LoadPhase::Failed(_) => view! { <SectionFallback /> }.into_any(),
        })
    }
}

/// Fixed-size pulsing block shown while a section loads.
#[component]
pub fn SectionPlaceholder(class: &'static str) -> impl IntoView {
    view! { <div class=format!("section-placeholder animate-pulse {class}") aria-busy="true"></div> }
}

#[component]
pub fn SectionFallback() -> impl IntoView {
    view! {
        <div class="section-fallback" role="status">
            <p>{FALLBACK_MESSAGE}</p>
        </div>
    }
}
