//! Static page content: features, pricing plans and FAQ entries.
//!
//! The collections live in `content/site.json`, which is embedded into the
//! binary at compile time. Parsing validates the record invariants once, so
//! every section can render its collection without further checks.

use serde::Deserialize;
use tracing::warn;

use crate::error::ContentError;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

/// Symbolic reference to an icon in the page's inline icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Layout,
    Calendar,
    Brain,
    Sparkles,
    LineChart,
}

/// In-page anchor targets reachable from the navigation links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Features,
    Pricing,
    Faq,
}

impl Anchor {
    /// Anchors in navigation order.
    pub const ALL: [Anchor; 3] = [Anchor::Features, Anchor::Pricing, Anchor::Faq];

    /// Element id of the section this anchor jumps to.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Features => "features",
            Anchor::Pricing => "pricing",
            Anchor::Faq => "faq",
        }
    }

    /// Fragment link, e.g. `#pricing`.
    pub fn href(self) -> &'static str {
        match self {
            Anchor::Features => "#features",
            Anchor::Pricing => "#pricing",
            Anchor::Faq => "#faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Features => "Features",
            Anchor::Pricing => "Pricing",
            Anchor::Faq => "FAQ",
        }
    }
}

/// Product name and copy shared by the navbar, hero and footer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    /// Path of the hero background image
    pub hero_image: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// A pricing tier.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plan {
    pub name: String,
    /// Monthly price as written on the page (e.g. `"9.99"`)
    pub price: String,
    pub features: Vec<String>,
    /// Promoted tier; at most one per page by convention
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    /// Parsed monthly price. Validation guarantees this is a finite,
    /// non-negative number for plans coming from [`SiteContent`].
    pub fn price_value(&self) -> Option<f64> {
        parse_price(&self.price)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Everything the page renders, validated.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub features: Vec<Feature>,
    pub plans: Vec<Plan>,
    pub faqs: Vec<Faq>,
}

impl SiteContent {
    /// Parse and validate the content embedded at build time.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    /// Parse and validate a content document.
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for (index, feature) in self.features.iter().enumerate() {
            require_text("features", index, "title", &feature.title)?;
            require_text("features", index, "description", &feature.description)?;
        }

        for (index, plan) in self.plans.iter().enumerate() {
            require_text("plans", index, "name", &plan.name)?;
            if plan.price_value().is_none() {
                return Err(ContentError::InvalidPrice {
                    plan: plan.name.clone(),
                    price: plan.price.clone(),
                });
            }
        }

        for (index, faq) in self.faqs.iter().enumerate() {
            require_text("faqs", index, "question", &faq.question)?;
            require_text("faqs", index, "answer", &faq.answer)?;
        }

        let popular = self.plans.iter().filter(|p| p.popular).count();
        if popular > 1 {
            warn!(popular, "more than one plan is flagged as popular");
        }

        Ok(())
    }
}

fn require_text(
    collection: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField {
            collection,
            index,
            field,
        })
    } else {
        Ok(())
    }
}

fn parse_price(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(features: &str, plans: &str, faqs: &str) -> String {
        format!(
            r#"{{
                "brand": {{ "name": "SuperSide", "tagline": "t", "hero_image": "/hero.png" }},
                "features": {features},
                "plans": {plans},
                "faqs": {faqs}
            }}"#
        )
    }

    #[test]
    fn bundled_content_is_valid() {
        let content = SiteContent::bundled().expect("bundled content parses");

        assert_eq!(content.brand.name, "SuperSide");
        assert_eq!(content.faqs.len(), 4);

        let icons: Vec<Icon> = content.features.iter().map(|f| f.icon).collect();
        assert_eq!(
            icons,
            vec![
                Icon::Layout,
                Icon::Calendar,
                Icon::Brain,
                Icon::Sparkles,
                Icon::LineChart
            ]
        );

        let plans: Vec<(&str, &str, bool)> = content
            .plans
            .iter()
            .map(|p| (p.name.as_str(), p.price.as_str(), p.popular))
            .collect();
        assert_eq!(
            plans,
            vec![("Free", "0", false), ("Pro", "9.99", true), ("Team", "19.99", false)]
        );
    }

    #[test]
    fn popular_defaults_to_false() {
        let json = document(
            "[]",
            r#"[{ "name": "Free", "price": "0", "features": [] }]"#,
            "[]",
        );
        let content = SiteContent::from_json(&json).unwrap();
        assert!(!content.plans[0].popular);
    }

    #[test]
    fn rejects_empty_feature_title() {
        let json = document(
            r#"[{ "icon": "brain", "title": "  ", "description": "d" }]"#,
            "[]",
            "[]",
        );
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyField {
                collection: "features",
                index: 0,
                field: "title"
            }
        ));
    }

    #[test]
    fn rejects_empty_faq_answer() {
        let json = document(
            "[]",
            "[]",
            r#"[{ "question": "q", "answer": "ok" }, { "question": "q2", "answer": "" }]"#,
        );
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyField {
                collection: "faqs",
                index: 1,
                field: "answer"
            }
        ));
    }

    #[test]
    fn rejects_negative_and_non_numeric_prices() {
        for price in ["-1", "free", "", "NaN", "inf"] {
            let plans = format!(r#"[{{ "name": "Odd", "price": "{price}", "features": [] }}]"#);
            let err = SiteContent::from_json(&document("[]", &plans, "[]")).unwrap_err();
            assert!(
                matches!(err, ContentError::InvalidPrice { ref plan, .. } if plan == "Odd"),
                "price {price:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_icon() {
        let json = document(
            r#"[{ "icon": "rocket", "title": "t", "description": "d" }]"#,
            "[]",
            "[]",
        );
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn multiple_popular_plans_are_accepted() {
        let plans = r#"[
            { "name": "A", "price": "1", "features": [], "popular": true },
            { "name": "B", "price": "2", "features": [], "popular": true }
        ]"#;
        let content = SiteContent::from_json(&document("[]", plans, "[]")).unwrap();
        assert_eq!(content.plans.iter().filter(|p| p.popular).count(), 2);
    }

    #[test]
    fn price_value_parses_decimal_text() {
        let plan = Plan {
            name: "Pro".into(),
            price: "9.99".into(),
            features: vec![],
            popular: true,
        };
        assert_eq!(plan.price_value(), Some(9.99));
    }

    #[test]
    fn anchors_map_to_section_ids() {
        let hrefs: Vec<&str> = Anchor::ALL.iter().map(|a| a.href()).collect();
        assert_eq!(hrefs, vec!["#features", "#pricing", "#faq"]);
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }
}
