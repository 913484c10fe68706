use leptos::prelude::*;

use super::deferred::{deferred_slot, deferred_view};
use super::icons::ContentIcon;
use super::ui::ShinyBadge;
use crate::content::{Anchor, Feature};

/// Features section; the grid itself is deferred past the first paint.
#[component]
pub fn FeaturesSection(features: Vec<Feature>, brand: String) -> impl IntoView {
    let id = Anchor::Features.id();
    let slot = deferred_slot(id, features);

    view! {
        <section id=id class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <ShinyBadge class=|| "section-badge" text="✨ Features" />
                    <h2 class="section-title">"Everything You Need to Stay Productive"</h2>
                    <p class="section-description">
                        {brand} " combines powerful features to help you work smarter, not harder."
                    </p>
                </div>
                {deferred_view(slot, "placeholder-grid", |features: Vec<Feature>| {
                    view! { <FeatureGrid features=features /> }
                })}
            </div>
        </section>
    }
}

/// One card per feature, in stored order.
#[component]
pub fn FeatureGrid(features: Vec<Feature>) -> impl IntoView {
    view! {
        <div class="feature-grid">
            {features
                .into_iter()
                .map(|feature| view! { <FeatureCard feature=feature /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="card feature-card">
            <div class="feature-glow" aria-hidden="true">
                <div class="feature-sheen"></div>
                <div class="feature-shimmer animate-shiny-text"></div>
            </div>
            <div class="feature-body">
                <div class="feature-icon">
                    <ContentIcon icon=feature.icon />
                </div>
                <h3 class="feature-title">{feature.title}</h3>
                <p class="feature-description">{feature.description}</p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Icon, SiteContent};
    use leptos::tachys::view::RenderHtml;

    fn feature(title: &str) -> Feature {
        Feature {
            icon: Icon::Sparkles,
            title: title.into(),
            description: format!("{title} description"),
        }
    }

    #[test]
    fn renders_one_card_per_feature_in_order() {
        let features = vec![feature("Alpha"), feature("Bravo"), feature("Charlie")];
        let html = view! { <FeatureGrid features=features /> }.to_html();

        assert_eq!(html.matches("class=\"card feature-card\"").count(), 3);

        let positions: Vec<usize> = ["Alpha", "Bravo", "Charlie"]
            .iter()
            .map(|title| html.find(title).expect("title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn renders_bundled_features() {
        let content = SiteContent::bundled().unwrap();
        let count = content.features.len();
        let html = view! { <FeatureGrid features=content.features /> }.to_html();

        assert_eq!(html.matches("class=\"card feature-card\"").count(), count);
        assert!(html.contains("Smart Tab Management"));
        assert!(html.contains("Productivity Insights"));
        assert!(html.contains("Performance Analytics"));
    }

    #[test]
    fn empty_collection_renders_empty_grid() {
        let html = view! { <FeatureGrid features=vec![] /> }.to_html();
        assert!(html.contains("feature-grid"));
        assert!(!html.contains("feature-card"));
    }
}
