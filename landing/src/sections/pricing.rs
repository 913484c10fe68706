use leptos::prelude::*;

use super::icons::{UiGlyph, UiIcon};
use crate::content::{Anchor, Plan};
use crate::variant::PlanVariant;

#[component]
pub fn PricingSection(plans: Vec<Plan>) -> impl IntoView {
    let id = Anchor::Pricing.id();
    view! {
        <section id=id class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Choose Your Plan"</h2>
                    <p class="section-description">
                        "Start free and upgrade as you grow. No credit card required."
                    </p>
                </div>
                <PricingTable plans=plans />
            </div>
        </section>
    }
}

/// One card per plan, in stored order. The popular plan gets the
/// highlighted variant and the "Most Popular" badge.
#[component]
pub fn PricingTable(plans: Vec<Plan>) -> impl IntoView {
    view! {
        <div class="pricing-grid">
            {plans.into_iter().map(|plan| view! { <PlanCard plan=plan /> }).collect_view()}
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let variant = PlanVariant::for_plan(plan.popular);

    view! {
        <article class=variant.card_class()>
            {variant.marker().map(|marker| view! { <span class="badge">{marker}</span> })}
            <h3 class="plan-name">{plan.name}</h3>
            <div class="plan-price">
                <span class="plan-amount">{format!("${}", plan.price)}</span>
                <span class="plan-period">"/month"</span>
            </div>
            <ul class="plan-features">
                {plan
                    .features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-feature">
                                <UiGlyph icon=UiIcon::CheckCircle class="plan-check" />
                                <span>{feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class=variant.button_class()>"Get Started"</button>
        </article>
    }
}
