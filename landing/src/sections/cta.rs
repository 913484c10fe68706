use leptos::prelude::*;

use super::ui::ShimmerButton;

#[component]
pub fn CallToAction(brand: String) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="cta-panel">
                    <h2 class="cta-title">"Ready to Supercharge Your Productivity?"</h2>
                    <p class="cta-description">
                        "Join thousands of users who have transformed their workflow with " {brand} "."
                    </p>
                    <ShimmerButton class="shimmer-button-inverted">"Add to Chrome - It's Free"</ShimmerButton>
                </div>
            </div>
        </section>
    }
}
