use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::config::SiteConfig;
use crate::i18n::Direction;
use crate::page::Page;

const ACTIVE_CLASS: &str = "active";

/// Handles to the rendered page, collected once at startup.
pub struct WebPage {
    window: Window,
    document: Document,
    triggers: Vec<(String, Element)>,
    panes: Vec<(String, Element)>,
    translatable: Vec<(String, Element)>,
}

impl WebPage {
    pub fn discover(window: &Window, document: &Document, config: &SiteConfig) -> Self {
        let triggers = query_all(document, &config.trigger_selector)
            .into_iter()
            .filter_map(|el| el.get_attribute("data-tab").map(|id| (id, el)))
            .collect();
        let panes = query_all(document, &config.pane_selector)
            .into_iter()
            .map(|el| (el.id(), el))
            .filter(|(id, _)| !id.is_empty())
            .collect();
        let translatable = query_all(document, "[data-i18n]")
            .into_iter()
            .filter_map(|el| el.get_attribute("data-i18n").map(|key| (key, el)))
            .collect();

        Self {
            window: window.clone(),
            document: document.clone(),
            triggers,
            panes,
            translatable,
        }
    }
}

impl Page for WebPage {
    fn trigger_ids(&self) -> Vec<String> {
        self.triggers.iter().map(|(id, _)| id.clone()).collect()
    }

    fn pane_ids(&self) -> Vec<String> {
        self.panes.iter().map(|(id, _)| id.clone()).collect()
    }

    fn set_tab_active(&mut self, id: &str, active: bool) {
        for (_, trigger) in self.triggers.iter().filter(|(t, _)| t == id) {
            set_class(trigger, ACTIVE_CLASS, active);
            let _ = trigger.set_attribute("aria-selected", if active { "true" } else { "false" });
        }
        for (_, pane) in self.panes.iter().filter(|(p, _)| p == id) {
            set_class(pane, ACTIVE_CLASS, active);
        }
    }

    fn fragment(&self) -> Option<String> {
        let hash = self.window.location().hash().ok()?;
        let id = hash.strip_prefix('#').unwrap_or(&hash);
        (!id.is_empty()).then(|| id.to_string())
    }

    fn replace_fragment(&mut self, id: &str) {
        let url = format!("#{}", id);
        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            warn!("Could not update address fragment: {:?}", e);
        }
    }

    fn set_direction(&mut self, direction: Direction, lang: &str) {
        let Some(root) = self.document.document_element() else {
            warn!("Document has no root element");
            return;
        };
        let _ = root.set_attribute("dir", direction.as_attr());
        let _ = root.set_attribute("lang", lang);
    }

    fn translation_keys(&self) -> Vec<String> {
        self.translatable.iter().map(|(key, _)| key.clone()).collect()
    }

    fn set_translated_text(&mut self, index: usize, text: &str) {
        if let Some((_, element)) = self.translatable.get(index) {
            element.set_text_content(Some(text));
        }
    }
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            warn!("Invalid selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        warn!("Could not toggle class {}: {:?}", class, e);
    }
}
