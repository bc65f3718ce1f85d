use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use yew::prelude::*;

use crate::config;
use crate::content::{self, Testimonial};

#[derive(Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
}

/// Hands out the testimonial list after a fake network delay. A list that
/// fails to parse resolves as empty so the carousel just hides itself.
#[hook]
pub fn use_testimonials() -> Loadable<Rc<Vec<Testimonial>>> {
    let state = use_state(|| Loadable::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TESTIMONIAL_LOAD_DELAY_MS, move || {
                    let items = content::testimonials().unwrap_or_else(|e| {
                        error!("Failed to load testimonials: {}", e);
                        Vec::new()
                    });
                    info!("Loaded {} testimonials", items.len());
                    state.set(Loadable::Ready(Rc::new(items)));
                });
                // Dropping the handle cancels the timer if we unmount first.
                move || drop(timeout)
            },
            (),
        );
    }

    (*state).clone()
}
