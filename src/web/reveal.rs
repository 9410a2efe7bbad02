use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::page::query_all;
use crate::config::SiteConfig;

/// Fades sections in the first time they scroll into view.
pub fn install(document: &Document, config: &SiteConfig) {
    let sections = query_all(document, &config.reveal_selector);
    if sections.is_empty() {
        debug!("No sections to reveal");
        return;
    }
    for section in &sections {
        let _ = section.class_list().add_1("fade-in");
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
    for section in &sections {
        observer.observe(section);
    }
    on_intersect.forget();
    info!("Scroll animations initialized for {} sections", sections.len());
}
