use log::{info, warn};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SignUpButtonProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Stand-in for the hosted sign-up flow: every button just raises an alert.
#[function_component(SignUpButton)]
pub fn sign_up_button(props: &SignUpButtonProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        info!("Sign up clicked");
        if let Some(window) = window() {
            if window.alert_with_message(config::SIGN_UP_MESSAGE).is_err() {
                warn!("Could not show sign up alert");
            }
        }
    });

    html! {
        <button class={classes!("sign-up-button", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
