// SuperSide Landing Page - Leptos 0.8 Edition
// Developed by The SuperSide Team (c)2025

use leptos::prelude::*;
use superside_landing::{App, ContentErrorNotice, SiteContent, telemetry};
use tracing::error;

fn main() {
    console_error_panic_hook::set_once();

    let directive = telemetry::filter_from_location()
        .unwrap_or_else(|| telemetry::DEFAULT_FILTER.to_string());
    telemetry::init(&directive);

    match SiteContent::bundled() {
        Ok(content) => {
            let year = js_sys::Date::new_0().get_full_year();
            leptos::mount::mount_to_body(move || view! { <App content=content year=year /> });
        }
        Err(err) => {
            error!(%err, "bundled content failed validation");
            let message = err.to_string();
            leptos::mount::mount_to_body(move || view! { <ContentErrorNotice message=message /> });
        }
    }
}
