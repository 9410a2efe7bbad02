use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use super::busy::hold_then_alert;
use super::WebController;
use crate::actions::SiteAction;
use crate::config::SiteConfig;

const PREFILL_DELAY_MS: u32 = 300;

/// One click listener on `<body>` for every tab trigger, in-page tab link,
/// call-to-action button and the logo (or its fallback).
pub fn install_click_delegate(window: &Window, document: &Document, controller: WebController) {
    let Some(body) = document.body() else {
        warn!("No <body>, tab clicks are not wired");
        return;
    };

    let window = window.clone();
    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Some(id) = closest(&target, "[data-tab]").and_then(|el| el.get_attribute("data-tab")) {
            controller.borrow_mut().select_tab(&id);
            return;
        }

        if let Some(link) = closest(&target, "[data-tab-link]") {
            event.prevent_default();
            let id = link.get_attribute("data-tab-link").unwrap_or_default();
            let switched = controller.borrow_mut().select_tab(&id);
            if let (true, Some(subject)) = (switched, link.get_attribute("data-subject")) {
                prefill_subject(doc.clone(), subject);
            }
            return;
        }

        if let Some(button) = closest(&target, "[data-action]") {
            let Some(action) = button.get_attribute("data-action").and_then(|a| SiteAction::parse(&a)) else {
                return;
            };
            event.prevent_default();
            info!("Action clicked: {:?}", action);
            let controller = controller.borrow();
            let plan = action.plan(controller.config());
            hold_then_alert(
                &window,
                button.dyn_into::<HtmlButtonElement>().ok(),
                plan.busy_label,
                plan.delay_ms,
                plan.message.to_string(),
                || {},
            );
            return;
        }

        if closest(&target, ".logo, .logo-fallback").is_some() {
            controller.borrow_mut().select_home();
            scroll_to_top(&window);
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) = body.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        warn!("Failed to install click handler: {:?}", e);
        return;
    }
    on_click.forget();
    info!("Tab navigation wired");
}

/// Swaps a logo image that fails to load for a text badge inside
/// `.logo-container`. Clicks on the badge go through the click delegate.
pub fn install_logo_fallback(document: &Document, config: &SiteConfig) {
    let Some(logo) = document
        .query_selector(".logo")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No logo on this page");
        return;
    };

    // The image may have failed before this module loaded.
    if let Some(image) = logo.dyn_ref::<HtmlImageElement>() {
        if image.complete() && image.natural_width() == 0 {
            show_logo_fallback(document, &logo, &config.logo_fallback_text, &config.logo_fallback_title);
            return;
        }
    }

    let doc = document.clone();
    let text = config.logo_fallback_text.clone();
    let title = config.logo_fallback_title.clone();
    let failed = logo.clone();
    let on_error = Closure::wrap(Box::new(move || {
        warn!("Logo failed to load, using fallback");
        show_logo_fallback(&doc, &failed, &text, &title);
    }) as Box<dyn FnMut()>);

    if let Err(e) = logo.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref()) {
        warn!("Failed to watch logo loading: {:?}", e);
        return;
    }
    on_error.forget();
}

fn show_logo_fallback(document: &Document, logo: &HtmlElement, text: &str, title: &str) {
    let Some(container) = document.query_selector(".logo-container").ok().flatten() else {
        return;
    };
    if container.query_selector(".logo-fallback").ok().flatten().is_some() {
        return;
    }
    let fallback = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            warn!("Could not create logo fallback: {:?}", e);
            return;
        }
    };
    fallback.set_class_name("logo-fallback");
    fallback.set_text_content(Some(text));
    let _ = fallback.set_attribute("title", title);

    logo.set_hidden(true);
    if let Err(e) = container.insert_before(&fallback, container.first_child().as_ref()) {
        warn!("Could not insert logo fallback: {:?}", e);
        logo.set_hidden(false);
    }
}

pub fn install_hash_listener(window: &Window, controller: WebController) {
    let on_hash_change = Closure::wrap(Box::new(move || {
        controller.borrow_mut().follow_fragment();
    }) as Box<dyn FnMut()>);

    if let Err(e) =
        window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
    {
        warn!("Failed to install hashchange handler: {:?}", e);
        return;
    }
    on_hash_change.forget();
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// The pane has to be visible before the field can be scrolled to.
fn prefill_subject(document: Document, subject: String) {
    Timeout::new(PREFILL_DELAY_MS, move || {
        let Some(field) = document
            .get_element_by_id("subject")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        field.set_value(&subject);
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        field.scroll_into_view_with_scroll_into_view_options(&options);
    })
    .forget();
}
