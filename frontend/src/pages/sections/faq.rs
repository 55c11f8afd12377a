use yew::prelude::*;

use crate::content::use_site_content;
use crate::hooks::use_disclosure;
use crate::nav::Anchor;

#[function_component(Faq)]
pub fn faq() -> Html {
    let content = use_site_content();
    let faqs = &content.faqs.items;
    let disclosure = use_disclosure(faqs.len());

    html! {
        <section id={Anchor::Faq.id()} class="section faq">
            <h2 class="section-title">{&content.faqs.title}</h2>
            <div class="faq-list">
                { for faqs.iter().enumerate().map(|(idx, entry)| {
                    let open = disclosure.open == Some(idx);
                    let select = disclosure.select.clone();
                    let toggle = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        select.emit(idx);
                    });
                    html! {
                        <div key={idx} class={classes!("faq-item", open.then_some("open"))}>
                            <button class="faq-question" onclick={toggle} aria-expanded={open.to_string()}>
                                <span>{&entry.question}</span>
                                <svg class="chevron" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <path stroke-linecap="round" stroke-linejoin="round" d="M6 9l6 6 6-6" />
                                </svg>
                            </button>
                            <div class="faq-answer">
                                <p>{&entry.answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <style>
                {r#"
                .faq-list { max-width: 48rem; margin: 0 auto; }
                .faq-item {
                    margin-bottom: 1rem;
                    overflow: hidden;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                }
                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    padding: 1rem;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question:focus { outline: none; }
                .chevron {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                    margin-left: 1rem;
                    transition: transform 0.3s;
                }
                .faq-item.open .chevron { transform: rotate(180deg); }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-in-out;
                }
                .faq-item.open .faq-answer { max-height: 15rem; }
                .faq-answer p { margin: 0; padding: 0 1rem 1rem; color: #4b5563; }
                "#}
            </style>
        </section>
    }
}
