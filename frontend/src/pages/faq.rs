use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{FaqEntry, FAQ};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <svg class="toggle-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                </svg>
            </button>
            {
                if *is_open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Have questions? We've got answers. If you can't find what you're looking for, feel free to contact us."}</p>
                </div>

                <div class="faq-list">
                    {
                        FAQ.iter().map(|FaqEntry { question, answer }| html! {
                            <FaqItem key={*question} question={*question} answer={*answer} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 8rem 0;
                    background: rgba(15, 23, 42, 0.5);
                }
                .faq-list {
                    max-width: 48rem;
                    margin: 4rem auto 0;
                }
                .faq-item {
                    border-bottom: 1px solid #1e293b;
                }
                .faq-item:last-child {
                    border-bottom: none;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    border-radius: 0.5rem;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .faq-question:hover {
                    background: rgba(15, 23, 42, 0.5);
                }
                .faq-question:focus-visible {
                    outline: 2px solid #00ae98;
                }
                .question-text {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #fff;
                }
                .toggle-icon {
                    width: 24px;
                    height: 24px;
                    color: #94a3b8;
                    flex-shrink: 0;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    padding: 0 1.25rem 1.25rem;
                    color: #94a3b8;
                    animation: faqOpen 0.4s cubic-bezier(0.04, 0.62, 0.23, 0.98);
                }
                .faq-answer p {
                    margin: 0;
                    padding-right: 2rem;
                }
                @keyframes faqOpen {
                    from { opacity: 0; transform: translateY(-4px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </section>
    }
}
