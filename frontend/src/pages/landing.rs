use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{AppPreview, Icon, Logo};
use crate::components::sign_up::SignUpButton;
use crate::components::tilt::TiltSurface;
use crate::content::{FEATURES, HOW_IT_WORKS};
use crate::pages::faq::Faq;
use crate::pages::testimonials::Testimonials;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-grid"></div>
            <div class="hero-blobs">
                <div class="blob blob-left"></div>
                <div class="blob blob-right"></div>
            </div>
            <TiltSurface span={(800.0, 400.0)} glow_radius={400} class={classes!("hero-content")}>
                <h1>
                    {"Stop Guessing."}
                    <br />
                    {"Start Quoting with Confidence."}
                </h1>
                <p class="hero-subtitle">
                    {"Slick Solutions is the AI-powered sidekick for your detailing business. Create accurate, profitable, and professional quotes in seconds, not minutes."}
                </p>
                <div class="hero-actions">
                    <SignUpButton class={classes!("hero-cta")}>{"Sign Up for Free"}</SignUpButton>
                    <a href="#features" class="hero-learn-more">{"Learn More \u{2192}"}</a>
                </div>
                <div class="hero-preview">
                    <div class="hero-preview-halo"></div>
                    <AppPreview />
                </div>
            </TiltSurface>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="features" class="features">
            <div class="section-container">
                <div class="section-heading">
                    <h2>{"The Toolkit for a Smarter Detailing Business"}</h2>
                    <p>{"Everything you need to streamline your quoting process, impress customers, and grow your profits."}</p>
                </div>
                <div class="features-grid">
                    {
                        FEATURES.iter().map(|feature| html! {
                            <TiltSurface key={feature.title} span={(400.0, 300.0)} class={classes!("feature-card")}>
                                <div class="feature-body">
                                    <Icon kind={feature.icon} class={classes!("feature-icon")} />
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            </TiltSurface>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="section-container">
                <div class="section-heading">
                    <h2>{"Get a Perfect Quote in 3 Simple Steps"}</h2>
                    <p>{"From vehicle arrival to customer approval in under a minute."}</p>
                </div>
                <div class="steps">
                    <div class="steps-line" aria-hidden="true"></div>
                    {
                        HOW_IT_WORKS.iter().map(|step| html! {
                            <div key={step.step.to_string()} class="step">
                                <div class="step-badge">
                                    <Icon kind={step.icon} class={classes!("step-icon")} />
                                    <span class="step-number">{step.step}</span>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <div class="section-container">
                <div class="cta-panel">
                    <h2>{"Transform Your Detailing Business Today"}</h2>
                    <p>{"Join hundreds of detailers who are saving time, increasing profits, and winning more jobs with Slick Solutions."}</p>
                    <SignUpButton class={classes!("cta-button")}>{"Start Your Free Trial"}</SignUpButton>
                    <p class="cta-note">{"No credit card required. 14-day free trial."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    let year = chrono::Local::now().year();
    // Legal pages don't exist yet.
    let inert = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <footer class="site-footer">
            <div class="section-container footer-content">
                <a href="#" class="footer-logo" aria-label="Slick Solutions - Back to top">
                    <Logo class={classes!("footer-logo-icon")} />
                    <span>{"Slick Solutions"}</span>
                </a>
                <div class="footer-copyright">
                    {format!("\u{a9} {} Slick Solutions. All rights reserved.", year)}
                </div>
                <div class="footer-links">
                    <a href="#privacy" onclick={inert.clone()}>{"Privacy Policy"}</a>
                    <a href="#terms" onclick={inert}>{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <main class="landing-page">
                <Hero />
                <Features />
                <HowItWorks />
                <Testimonials />
                <Faq />
                <CallToAction />
            </main>
            <SiteFooter />

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    background-image: linear-gradient(rgba(30, 41, 59, 0.2) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(30, 41, 59, 0.2) 1px, transparent 1px);
                    background-size: 40px 40px;
                    mask-image: linear-gradient(to bottom, white 5%, transparent 100%);
                }
                .hero-blobs {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: -1;
                }
                .blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.2;
                    animation: blob 7s infinite;
                }
                .blob-left {
                    top: 25%;
                    left: 25%;
                    background: rgba(0, 87, 76, 0.5);
                }
                .blob-right {
                    top: 50%;
                    right: 25%;
                    background: rgba(19, 78, 74, 0.5);
                    animation-delay: 2s;
                }
                @keyframes blob {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(30px, -50px) scale(1.1); }
                    66% { transform: translate(-20px, 20px) scale(0.9); }
                }
                .tilt-surface {
                    position: relative;
                    transform-style: preserve-3d;
                    transition: transform 0.1s ease-out;
                }
                .tilt-glow {
                    position: absolute;
                    inset: -1px;
                    border-radius: 0.75rem;
                    pointer-events: none;
                    background: radial-gradient(var(--glow-radius) at var(--glow-x) var(--glow-y), rgba(0, 174, 152, 0.12), transparent 80%);
                }
                .hero-content {
                    max-width: 72rem;
                    padding: 0 1.5rem;
                    text-align: center;
                    z-index: 1;
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 800;
                    line-height: 1.1;
                    letter-spacing: -0.05em;
                    background: linear-gradient(to right, #f1f5f9, #94a3b8);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    animation: rise 0.6s ease-out both;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    margin: 1.5rem auto 0;
                    font-size: 1.25rem;
                    color: #94a3b8;
                    animation: rise 0.6s ease-out 0.1s both;
                }
                .hero-actions {
                    margin-top: 2.5rem;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    animation: rise 0.6s ease-out 0.2s both;
                }
                .sign-up-button {
                    border: none;
                    cursor: pointer;
                    font-weight: 700;
                    transition: transform 0.2s ease, background 0.3s ease;
                }
                .sign-up-button:hover {
                    transform: scale(1.05);
                }
                .sign-up-button:active {
                    transform: scale(0.95);
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    background: #00806f;
                    color: #fff;
                    box-shadow: 0 25px 50px -12px rgba(0, 87, 76, 0.6);
                    animation: breathe 2s ease-in-out infinite alternate;
                }
                .hero-cta:hover {
                    background: #006b5d;
                }
                @keyframes breathe {
                    from { scale: 1; }
                    to { scale: 1.04; }
                }
                .hero-learn-more {
                    padding: 1rem 1.5rem;
                    border-radius: 0.5rem;
                    color: #cbd5e1;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .hero-learn-more:hover {
                    background: rgba(30, 41, 59, 0.5);
                }
                .hero-preview {
                    position: relative;
                    max-width: 56rem;
                    margin: 4rem auto 0;
                    animation: rise 0.6s ease-out 0.3s both;
                }
                .hero-preview-halo {
                    position: absolute;
                    inset: -0.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(to right, #00695c, #0f766e);
                    filter: blur(8px);
                    opacity: 0.2;
                }
                .app-preview {
                    position: relative;
                    width: 100%;
                    height: auto;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(51, 65, 85, 0.5);
                }
                @keyframes rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .features, .how-it-works, .cta {
                    padding: 8rem 0;
                }
                .features-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .feature-card {
                    height: 100%;
                    padding: 2rem;
                    background: #0f172a;
                    border: 1px solid #1e293b;
                    border-radius: 0.75rem;
                }
                .feature-body {
                    transform: translateZ(20px);
                }
                .feature-icon {
                    width: 32px;
                    height: 32px;
                    margin-bottom: 1rem;
                    color: #2dd4bf;
                }
                .feature-card h3, .step h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }
                .feature-card p, .step p {
                    margin-top: 0.5rem;
                    color: #94a3b8;
                }
                .how-it-works {
                    background: rgba(15, 23, 42, 0.5);
                }
                .steps {
                    position: relative;
                    margin-top: 5rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    row-gap: 4rem;
                }
                .steps-line {
                    display: none;
                    position: absolute;
                    left: 0;
                    right: 0;
                    top: 2.5rem;
                    height: 2px;
                    background: rgba(51, 65, 85, 0.5);
                }
                .step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    transition: transform 0.3s ease;
                }
                .step:hover {
                    transform: translateY(-8px) scale(1.03);
                }
                .step-badge {
                    position: relative;
                    width: 5rem;
                    height: 5rem;
                    margin-bottom: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #1e293b;
                    border: 2px solid #00ae98;
                    z-index: 1;
                }
                .step-icon {
                    width: 40px;
                    height: 40px;
                    color: #2dd4bf;
                }
                .step-number {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 50%;
                    background: #00ae98;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .cta-panel {
                    position: relative;
                    padding: 4rem 2rem;
                    border-radius: 1rem;
                    text-align: center;
                    background: linear-gradient(to right, #005a4f, #115e59);
                    overflow: hidden;
                }
                .cta-panel h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 800;
                    color: #fff;
                }
                .cta-panel p {
                    max-width: 42rem;
                    margin: 1rem auto 0;
                    font-size: 1.125rem;
                    color: #dcfce7;
                }
                .cta-button {
                    margin-top: 2.5rem;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    background: #fff;
                    color: #006b5d;
                }
                .cta-button:hover {
                    background: #e2e8f0;
                }
                .cta-panel .cta-note {
                    font-size: 0.875rem;
                    color: #bbf7d0;
                }
                .site-footer {
                    border-top: 1px solid #1e293b;
                }
                .footer-content {
                    padding-top: 2rem;
                    padding-bottom: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #cbd5e1;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-decoration: none;
                }
                .footer-logo-icon {
                    width: 24px;
                    height: 24px;
                    color: #94a3b8;
                }
                .footer-copyright {
                    color: #94a3b8;
                    font-size: 0.875rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-links a {
                    color: #94a3b8;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-links a:hover {
                    color: #fff;
                }
                @media (min-width: 768px) {
                    .features-grid, .steps {
                        grid-template-columns: repeat(3, 1fr);
                        column-gap: 2rem;
                    }
                    .steps-line {
                        display: block;
                    }
                    .cta-panel {
                        padding: 4rem;
                    }
                    .footer-content {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </>
    }
}
