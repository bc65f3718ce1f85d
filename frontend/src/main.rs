use yew::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod provider;
mod carousel {
    pub mod controller;
    pub mod scroll;
    pub mod viewport;
}
mod components {
    pub mod icons;
    pub mod sign_up;
    pub mod tilt;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod testimonials;
}

use components::icons::Logo;
use components::sign_up::SignUpButton;
use content::NAV_LINKS;
use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > config::HEADER_SCROLL_THRESHOLD);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("Could not attach header scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, we only collapse the menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |onclick: Option<Callback<MouseEvent>>| {
        NAV_LINKS.iter().map(|link| html! {
            <a key={link.name} href={link.href} class="nav-link" onclick={onclick.clone()}>
                {link.name}
            </a>
        }).collect::<Html>()
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#" class="nav-logo">
                    <Logo class={classes!("nav-logo-icon")} />
                    <span>{"Slick Solutions"}</span>
                </a>

                <div class="nav-links">
                    { links(None) }
                </div>

                <div class="nav-cta">
                    <SignUpButton class={classes!("nav-sign-up")}>{"Get Started"}</SignUpButton>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Open menu"
                    aria-expanded={menu_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links(Some(close_menu.clone())) }
                            <SignUpButton class={classes!("nav-sign-up", "mobile")}>{"Get Started"}</SignUpButton>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #020617;
                    color: #e2e8f0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .section-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-heading {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .section-heading h2 {
                    font-size: clamp(1.875rem, 3vw, 2.25rem);
                    font-weight: 700;
                    color: #fff;
                }
                .section-heading p {
                    margin-top: 1rem;
                    font-size: 1.125rem;
                    color: #94a3b8;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(2, 6, 23, 0.8);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid #1e293b;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-logo-icon {
                    width: 32px;
                    height: 32px;
                    color: #00ae98;
                }
                .nav-links, .nav-cta {
                    display: none;
                    gap: 2rem;
                }
                .nav-link {
                    color: #cbd5e1;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #2dd4bf;
                }
                .nav-sign-up {
                    padding: 0.5rem 1.25rem;
                    border-radius: 0.375rem;
                    background: #00806f;
                    color: #fff;
                    box-shadow: 0 10px 15px -3px rgba(0, 64, 56, 0.5);
                }
                .nav-sign-up:hover {
                    background: #006b5d;
                }
                .nav-sign-up.mobile {
                    width: 100%;
                    margin-top: 1rem;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                .mobile-menu {
                    margin: 0 1.5rem 1rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: #0f172a;
                    animation: menuOpen 0.2s ease-out;
                    transform-origin: top;
                }
                .mobile-menu .nav-link {
                    display: block;
                    padding: 0.5rem 0;
                }
                @keyframes menuOpen {
                    from { opacity: 0; transform: scaleY(0.9); }
                    to { opacity: 1; transform: scaleY(1); }
                }
                @media (min-width: 768px) {
                    .nav-links, .nav-cta {
                        display: flex;
                        align-items: center;
                    }
                    .burger-menu, .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Slick Solutions landing page");
    yew::Renderer::<App>::new().render();
}
