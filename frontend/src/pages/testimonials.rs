use std::collections::BTreeSet;
use std::rc::Rc;

use log::error;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_update;

use crate::carousel::controller::{CarouselController, ControlState};
use crate::carousel::scroll::ContainerScroller;
use crate::carousel::viewport::ViewportObserver;
use crate::config;
use crate::content::Testimonial;
use crate::provider::{use_testimonials, Loadable};

#[derive(Clone, Copy)]
enum NavRequest {
    Prev,
    Next,
    To(usize),
}

fn arrow_button(
    state: ControlState,
    side: &'static str,
    label: &'static str,
    path: &'static str,
    onclick: Callback<MouseEvent>,
) -> Html {
    if state == ControlState::Hidden {
        return html! {};
    }
    html! {
        <button
            class={classes!("carousel-arrow", side)}
            {onclick}
            disabled={state == ControlState::Disabled}
            aria-label={label}
        >
            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
            </svg>
        </button>
    }
}

fn placeholder_card(i: usize) -> Html {
    html! {
        <div key={format!("placeholder-{}", i)} class="testimonial-card placeholder">
            <div class="placeholder-quote"></div>
            <div class="placeholder-author">
                <div class="placeholder-avatar"></div>
                <div class="placeholder-lines">
                    <div class="placeholder-line"></div>
                    <div class="placeholder-line short"></div>
                </div>
            </div>
        </div>
    }
}

fn testimonial_card(index: usize, testimonial: &Testimonial) -> Html {
    html! {
        <figure key={index.to_string()} class="testimonial-card" data-index={index.to_string()}>
            <blockquote>
                <p>{format!("\"{}\"", testimonial.quote)}</p>
            </blockquote>
            <figcaption>
                <img src={testimonial.avatar_url.clone()} alt={testimonial.author.clone()} />
                <div>
                    <div class="testimonial-author">{&testimonial.author}</div>
                    <div class="testimonial-company">{&testimonial.company}</div>
                </div>
            </figcaption>
        </figure>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let testimonials = use_testimonials();
    let controller = use_mut_ref(CarouselController::new);
    let update = use_update();
    let track_ref = use_node_ref();
    let scroller = ContainerScroller::new(track_ref.clone());

    let loaded: Option<Rc<Vec<Testimonial>>> = match &testimonials {
        Loadable::Ready(items) => Some(items.clone()),
        Loadable::Loading => None,
    };

    // Hand the list length to the controller once the provider resolves.
    {
        let controller = controller.clone();
        let update = update.clone();
        use_effect_with_deps(
            move |loaded: &Option<Rc<Vec<Testimonial>>>| {
                if let Some(items) = loaded {
                    controller.borrow_mut().resolve(items.len());
                    update();
                }
                || ()
            },
            loaded.clone(),
        );
    }

    // Rendered cards are only observed once real items replaced the placeholders.
    {
        let controller = controller.clone();
        let update = update.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |count: &Option<usize>| {
                let observer = match (count, track_ref.cast::<Element>()) {
                    (Some(_), Some(track)) => {
                        let on_report = Callback::from(move |visible: BTreeSet<usize>| {
                            let changed = controller.borrow_mut().on_visibility_report(&visible);
                            if changed {
                                update();
                            }
                        });
                        ViewportObserver::observe_children(&track, config::VISIBILITY_THRESHOLD, on_report)
                            .map_err(|e| error!("Failed to observe testimonials: {:?}", e))
                            .ok()
                    }
                    _ => None,
                };
                move || drop(observer)
            },
            loaded.as_ref().map(|items| items.len()),
        );
    }

    let navigate = {
        let controller = controller.clone();
        let update = update.clone();
        Callback::from(move |request: NavRequest| {
            {
                let mut controller = controller.borrow_mut();
                match request {
                    NavRequest::Prev => controller.prev(&scroller),
                    NavRequest::Next => controller.next(&scroller),
                    NavRequest::To(index) => controller.go_to(index, &scroller),
                }
            }
            update();
        })
    };

    let state = controller.borrow().clone();

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>{"Trusted by Detailers Like You"}</h2>
                    <p>{"Hear how Slick Solutions is transforming detailing businesses across the country."}</p>
                </div>

                <div class="carousel">
                    <div class="carousel-track" ref={track_ref}>
                        {
                            match &loaded {
                                None => (0..config::PLACEHOLDER_COUNT).map(placeholder_card).collect::<Html>(),
                                Some(items) => items
                                    .iter()
                                    .enumerate()
                                    .map(|(i, t)| testimonial_card(i, t))
                                    .collect::<Html>(),
                            }
                        }
                    </div>
                    { arrow_button(
                        state.prev_control(),
                        "prev",
                        "Previous testimonial",
                        "M15 19l-7-7 7-7",
                        navigate.reform(|_| NavRequest::Prev),
                    ) }
                    { arrow_button(
                        state.next_control(),
                        "next",
                        "Next testimonial",
                        "M9 5l7 7-7 7",
                        navigate.reform(|_| NavRequest::Next),
                    ) }
                </div>

                {
                    if state.shows_page_indicator() {
                        html! {
                            <div class="carousel-dots">
                                {
                                    state.page_indicator_state().into_iter().enumerate().map(|(i, active)| {
                                        html! {
                                            <button
                                                key={i.to_string()}
                                                class={classes!("carousel-dot", active.then(|| "active"))}
                                                onclick={navigate.reform(move |_: MouseEvent| NavRequest::To(i))}
                                                aria-label={format!("Go to testimonial {}", i + 1)}
                                                aria-current={active.to_string()}
                                            />
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .testimonials-section {
                    padding: 8rem 0;
                }
                .carousel {
                    position: relative;
                    margin-top: 4rem;
                }
                .carousel-track {
                    display: flex;
                    gap: 2rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scroll-behavior: smooth;
                    padding: 0 1.5rem 1rem;
                    margin: 0 -1.5rem;
                    scrollbar-width: none;
                }
                .carousel-track::-webkit-scrollbar {
                    display: none;
                }
                .testimonial-card {
                    flex-shrink: 0;
                    scroll-snap-align: center;
                    width: 100%;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    background: #0f172a;
                    border: 1px solid #1e293b;
                    border-radius: 0.75rem;
                    padding: 2rem;
                    transition: transform 0.3s ease;
                }
                .testimonial-card:hover {
                    transform: translateY(-8px);
                }
                .testimonial-card blockquote {
                    flex-grow: 1;
                    margin: 0;
                    color: #cbd5e1;
                }
                .testimonial-card figcaption {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-card img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                }
                .testimonial-author {
                    font-weight: 700;
                    color: #fff;
                }
                .testimonial-company {
                    color: #94a3b8;
                    font-size: 0.875rem;
                }
                .testimonial-card.placeholder {
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .placeholder-quote {
                    height: 6rem;
                    background: #334155;
                    border-radius: 0.25rem;
                }
                .placeholder-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .placeholder-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #334155;
                }
                .placeholder-lines {
                    flex: 1;
                }
                .placeholder-line {
                    height: 1rem;
                    margin-bottom: 0.5rem;
                    background: #334155;
                    border-radius: 0.25rem;
                }
                .placeholder-line.short {
                    width: 50%;
                    height: 0.75rem;
                }
                @keyframes pulse {
                    50% { opacity: 0.5; }
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(30, 41, 59, 0.5);
                    color: #fff;
                    display: none;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .carousel-arrow svg {
                    width: 24px;
                    height: 24px;
                }
                .carousel-arrow:hover {
                    background: #334155;
                }
                .carousel-arrow:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .carousel-arrow.prev {
                    left: -1rem;
                }
                .carousel-arrow.next {
                    right: -1rem;
                }
                .carousel-dots {
                    margin-top: 2rem;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 8px;
                    height: 8px;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: #475569;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-dot:hover {
                    background: #64748b;
                }
                .carousel-dot.active {
                    background: #00ae98;
                    transform: scale(1.25);
                }
                @media (min-width: 768px) {
                    .testimonial-card {
                        width: calc(50% - 1rem);
                    }
                    .carousel-arrow {
                        display: flex;
                    }
                }
                @media (min-width: 1024px) {
                    .testimonial-card {
                        width: calc(33.333% - 1.333rem);
                    }
                }
                "#}
            </style>
        </section>
    }
}
