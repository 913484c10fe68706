use leptos::prelude::*;

use super::deferred::{deferred_slot, deferred_view};
use crate::content::{Anchor, Faq};
use crate::variant::faq_stagger_ms;

/// Single-item collapsible accordion: at most one answer is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` (closing any other), or collapse it if already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[component]
pub fn FaqSection(faqs: Vec<Faq>, brand: String) -> impl IntoView {
    let id = Anchor::Faq.id();
    let slot = deferred_slot(id, faqs);

    view! {
        <section id=id class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                    <p class="section-description">
                        "Everything you need to know about " {brand}
                    </p>
                </div>
                <div class="faq-column">
                    {deferred_view(slot, "placeholder-list", |faqs: Vec<Faq>| {
                        view! { <FaqList faqs=faqs /> }
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FaqList(faqs: Vec<Faq>) -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::default());

    view! {
        <div class="accordion">
            {faqs
                .into_iter()
                .enumerate()
                .map(|(index, faq)| view! { <FaqItem index=index faq=faq accordion=accordion /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FaqItem(index: usize, faq: Faq, accordion: RwSignal<AccordionState>) -> impl IntoView {
    let is_open = move || accordion.with(|a| a.is_open(index));
    let panel_id = format!("faq-panel-{index}");
    let controls = panel_id.clone();
    let Faq { question, answer } = faq;

    view! {
        <div
            class="accordion-item animate-rise"
            style=format!("animation-delay: {}ms", faq_stagger_ms(index))
            data-state=move || if is_open() { "open" } else { "closed" }
        >
            <button
                class="accordion-trigger"
                aria-expanded=move || is_open().to_string()
                aria-controls=controls
                on:click=move |_| accordion.update(|a| a.toggle(index))
            >
                <span class="accordion-question">{question}</span>
                <span class="accordion-chevron" class:rotated=is_open aria-hidden="true">"▾"</span>
            </button>
            <Show when=is_open>
                <div id=panel_id.clone() class="accordion-content" role="region">
                    {answer.clone()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn accordion_opens_one_item_at_a_time() {
        let mut state = AccordionState::default();
        assert_eq!(state.open_item(), None);

        state.toggle(1);
        assert!(state.is_open(1));

        state.toggle(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(1));
    }

    #[test]
    fn accordion_collapses_open_item() {
        let mut state = AccordionState::default();
        state.toggle(0);
        state.toggle(0);
        assert_eq!(state.open_item(), None);
    }

    #[test]
    fn renders_questions_in_order_collapsed() {
        let faqs = SiteContent::bundled().unwrap().faqs;
        let questions: Vec<String> = faqs.iter().map(|f| f.question.clone()).collect();

        let html = Owner::new().with(|| view! { <FaqList faqs=faqs /> }.to_html());

        assert_eq!(html.matches("class=\"accordion-trigger\"").count(), questions.len());
        let positions: Vec<usize> = questions
            .iter()
            .map(|q| html.find(q.as_str()).expect("question rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(!html.contains("accordion-content"));
        assert!(html.contains("animation-delay: 300ms"));
    }
}
