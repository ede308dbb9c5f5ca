//! FAQ accordion bound to active FAQs.

use eexplo_content::sort_faqs;
use leptos::prelude::*;

use crate::catalog;
use crate::components::hero::SectionHeading;
use crate::components::spinner::Spinner;
use crate::net::types::{ContentScope, Faq};
use crate::state::accordion::AccordionState;
use crate::util::binding::{display_list, use_section_data};

#[component]
pub fn FaqSection(#[prop(into, default = "Frequently Asked Questions".to_owned())] title: String) -> impl IntoView {
    let data = use_section_data::<Faq>(ContentScope::Featured);
    let rows = display_list(data, catalog::faqs());
    let sorted = Memo::new(move |_| {
        let mut faqs = rows.get();
        sort_faqs(&mut faqs);
        faqs
    });
    let accordion = RwSignal::new(AccordionState::default());

    view! {
        <section class="section faq-section" data-source=move || data.with(|d| d.source_attr())>
            <SectionHeading eyebrow="FAQ" title=title/>
            <Show when=move || !data.with(|d| d.loading) fallback=|| view! { <Spinner/> }>
                <div class="accordion">
                    {move || {
                        sorted
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, faq)| view! { <FaqItem index=index faq=faq accordion=accordion/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}

#[component]
fn FaqItem(index: usize, faq: Faq, accordion: RwSignal<AccordionState>) -> impl IntoView {
    let Faq { id, question, answer, .. } = faq;
    let is_open = move || accordion.with(|a| a.is_open(index));
    let panel_id = format!("faq-panel-{id}");
    let controls = panel_id.clone();

    view! {
        <div class="accordion__item" class:accordion__item--open=is_open>
            <button
                class="accordion__trigger"
                aria-expanded=move || if is_open() { "true" } else { "false" }
                aria-controls=controls
                on:click=move |_| accordion.update(|a| a.toggle(index))
            >
                <span>{question}</span>
                <span class="accordion__chevron" aria-hidden="true">{move || if is_open() { "−" } else { "+" }}</span>
            </button>
            <Show when=is_open>
                <div class="accordion__panel" id=panel_id.clone()>
                    <p>{answer.clone()}</p>
                </div>
            </Show>
        </div>
    }
}
