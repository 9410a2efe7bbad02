//! Browser wiring: builds the controller over the live document and hooks
//! every feature up independently, so markup missing for one never stops
//! the others.

pub mod busy;
pub mod contact;
pub mod events;
pub mod fetch;
pub mod page;
pub mod reveal;
pub mod storage;

use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;
use yew::Callback;

use crate::components::locale_switcher::{LocaleSwitcher, LocaleSwitcherProps};
use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::nav::{self, NavigationController, SharedController};
use fetch::HttpTranslationSource;
use page::WebPage;
use storage::SiteStore;

pub type WebController = SharedController<WebPage, SiteStore>;

pub fn start() {
    let Some(window) = web_sys::window() else {
        warn!("No window, nothing to initialize");
        return;
    };
    let Some(document) = window.document() else {
        warn!("No document, nothing to initialize");
        return;
    };

    let config = read_config(&document);
    let page = WebPage::discover(&window, &document, &config);
    let store = SiteStore::open(&window);
    let controller = NavigationController::new(page, store, config.clone()).shared();
    let source = Rc::new(HttpTranslationSource::new(config.clone()));

    let initial = controller.borrow_mut().initialize();
    {
        let controller = controller.clone();
        let source = source.clone();
        spawn_local(async move {
            let _ = nav::load_locale(controller, source, initial).await;
        });
    }

    events::install_click_delegate(&window, &document, controller.clone());
    events::install_hash_listener(&window, controller.clone());
    events::install_logo_fallback(&document, &config);
    mount_locale_switcher(&document, &config, controller, source);
    reveal::install(&document, &config);
    contact::install(&window, &document, &config);

    info!("All features initialized");
}

fn read_config(document: &Document) -> SiteConfig {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map(|raw| SiteConfig::from_json(&raw))
        .unwrap_or_default()
}

fn mount_locale_switcher(
    document: &Document,
    config: &SiteConfig,
    controller: WebController,
    source: Rc<HttpTranslationSource>,
) {
    let Some(host) = document.get_element_by_id(&config.switcher_host_id) else {
        info!("No locale switcher on this page");
        return;
    };

    let current = controller.borrow().locale().code().to_string();
    let on_select = Callback::from(move |code: String| {
        let controller = controller.clone();
        let source = source.clone();
        spawn_local(async move {
            let _ = nav::select_locale(controller, source, code).await;
        });
    });

    yew::Renderer::<LocaleSwitcher>::with_root_and_props(
        host,
        LocaleSwitcherProps {
            locales: config.locales.clone(),
            current,
            on_select,
        },
    )
    .render();
}
