use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement, Window};

use super::busy::hold_then_alert;
use crate::config::SiteConfig;

const SUBMIT_DELAY_MS: u32 = 1500;

/// Acknowledges contact form submissions locally; nothing leaves the page.
pub fn install(window: &Window, document: &Document, config: &SiteConfig) {
    let Some(form) = document
        .query_selector(&config.contact_form_selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("No contact form on this page");
        return;
    };

    let window = window.clone();
    let sending_label = config.sending_label.clone();
    let thank_you = config.thank_you_message.clone();
    let submitted = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        info!("Contact form submitted");

        let button = submitted
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let form = submitted.clone();
        hold_then_alert(
            &window,
            button,
            Some(&sending_label),
            SUBMIT_DELAY_MS,
            thank_you.clone(),
            move || form.reset(),
        );
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
        warn!("Failed to wire contact form: {:?}", e);
        return;
    }
    on_submit.forget();
}
