use leptos::prelude::*;

use super::icons::{UiGlyph, UiIcon};
use crate::content::{Anchor, Brand};

/// Columns of placeholder links: (heading, labels).
const LINK_COLUMNS: [(&str, [&str; 3]); 2] = [
    ("Company", ["About", "Blog", "Careers"]),
    ("Legal", ["Privacy", "Terms", "Cookie Policy"]),
];

#[component]
pub fn Footer(brand: Brand, year: u32) -> impl IntoView {
    let copyright = format!("© {year} {}. All rights reserved.", brand.name);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <UiGlyph icon=UiIcon::Chrome class="brand-icon" />
                            <span class="brand-name">{brand.name}</span>
                        </div>
                        <p class="footer-tagline">{brand.tagline}</p>
                    </div>
                    <div class="footer-column">
                        <h4 class="footer-heading">"Product"</h4>
                        <ul class="footer-links">
                            {Anchor::ALL
                                .into_iter()
                                .map(|anchor| view! {
                                    <li><a href=anchor.href() class="footer-link">{anchor.label()}</a></li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    {LINK_COLUMNS
                        .into_iter()
                        .map(|(heading, labels)| view! {
                            <div class="footer-column">
                                <h4 class="footer-heading">{heading}</h4>
                                <ul class="footer-links">
                                    {labels
                                        .into_iter()
                                        .map(|label| view! {
                                            <li><a href="#" class="footer-link">{label}</a></li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="footer-bottom">{copyright}</div>
            </div>
        </footer>
    }
}
