use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::{self, SiteConfig};
use crate::error::LocaleError;
use crate::i18n::{Locale, TranslationSource, TranslationTable};
use crate::page::{Page, TabRegistry};
use crate::storage::PreferenceStore;

/// Controller shared between event handlers and in-flight locale loads.
pub type SharedController<P, S> = Rc<RefCell<NavigationController<P, S>>>;

/// A locale load that has been issued but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRequest {
    seq: u64,
    locale: Locale,
}

impl LocaleRequest {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleOutcome {
    /// The table was applied; `replaced` elements got new text.
    Applied { replaced: usize },
    /// A newer request was issued while this one was in flight.
    Superseded,
}

/// Owns the active tab and the active locale, and is the only thing that
/// writes either of them to the page.
pub struct NavigationController<P, S> {
    page: P,
    store: S,
    config: SiteConfig,
    registry: TabRegistry,
    active: Option<String>,
    locale: Locale,
    translations: TranslationTable,
    latest_request: u64,
}

impl<P: Page, S: PreferenceStore> NavigationController<P, S> {
    pub fn new(page: P, store: S, config: SiteConfig) -> Self {
        let registry = TabRegistry::discover(&page);
        let locale = Locale::parse(&config.default_locale, &config.rtl_languages)
            .unwrap_or_default();
        Self {
            page,
            store,
            config,
            registry,
            active: None,
            locale,
            translations: TranslationTable::default(),
            latest_request: 0,
        }
    }

    pub fn shared(self) -> SharedController<P, S> {
        Rc::new(RefCell::new(self))
    }

    /// Activates the tab named by the fragment (or the first tab), applies
    /// the persisted locale's direction and returns the load request for
    /// its translations.
    pub fn initialize(&mut self) -> LocaleRequest {
        for entry in self.registry.entries() {
            self.page.set_tab_active(&entry.id, false);
        }
        self.active = None;

        let target = self
            .page
            .fragment()
            .filter(|id| self.registry.is_selectable(id))
            .or_else(|| self.registry.first_selectable().map(str::to_string));
        match target {
            Some(id) => self.switch_to(&id),
            None => debug!("No tabs on this page"),
        }

        let locale = self.persisted_locale();
        self.page.set_direction(locale.direction(), locale.code());
        self.locale = locale.clone();
        info!(
            "Navigation initialized: {} tab(s), locale {}",
            self.registry.entries().len(),
            self.locale.code()
        );
        self.issue(locale)
    }

    /// Returns whether `id` was selectable. Unknown ids leave everything as
    /// it was.
    pub fn select_tab(&mut self, id: &str) -> bool {
        if !self.registry.is_selectable(id) {
            log::log!(config::unknown_tab_level(), "Ignoring unknown tab {:?}", id);
            return false;
        }
        self.switch_to(id);
        true
    }

    /// Goes to the configured home tab, or the first tab when the page has
    /// no such tab.
    pub fn select_home(&mut self) -> bool {
        let target = if self.registry.is_selectable(&self.config.home_tab) {
            Some(self.config.home_tab.clone())
        } else {
            self.registry.first_selectable().map(str::to_string)
        };
        match target {
            Some(id) => self.select_tab(&id),
            None => false,
        }
    }

    /// Re-reads the fragment after the user edited it by hand.
    pub fn follow_fragment(&mut self) -> bool {
        match self.page.fragment() {
            Some(id) if self.active.as_deref() != Some(id.as_str()) => self.select_tab(&id),
            _ => false,
        }
    }

    /// Persists `code` and issues a load request for it. Any request issued
    /// earlier becomes stale.
    pub fn request_locale(&mut self, code: &str) -> Result<LocaleRequest, LocaleError> {
        let locale = Locale::parse(code, &self.config.rtl_languages).map_err(|e| {
            warn!("Rejected locale selection: {}", e);
            e
        })?;
        self.store.save(&self.config.storage_key, locale.code());
        Ok(self.issue(locale))
    }

    /// Applies the result of `request` unless it has been superseded. A
    /// failed load is logged and leaves text and direction untouched.
    pub fn complete_locale(
        &mut self,
        request: LocaleRequest,
        result: Result<TranslationTable, LocaleError>,
    ) -> Result<LocaleOutcome, LocaleError> {
        if request.seq != self.latest_request {
            debug!(
                "Discarding stale translations for {} (request {}, latest {})",
                request.locale.code(),
                request.seq,
                self.latest_request
            );
            return Ok(LocaleOutcome::Superseded);
        }

        let table = result.map_err(|e| {
            warn!("Failed to load locale {}: {}", request.locale.code(), e);
            e
        })?;

        let replaced = self.apply_translations(&table);
        self.page
            .set_direction(request.locale.direction(), request.locale.code());
        info!(
            "Applied locale {} ({} of {} strings used)",
            request.locale.code(),
            replaced,
            table.len()
        );
        self.locale = request.locale;
        self.translations = table;
        Ok(LocaleOutcome::Applied { replaced })
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn switch_to(&mut self, id: &str) {
        if let Some(current) = self.active.take() {
            self.page.set_tab_active(&current, false);
        }
        self.page.set_tab_active(id, true);
        self.page.replace_fragment(id);
        self.active = Some(id.to_string());
        info!("Switched to tab: {}", id);
    }

    fn persisted_locale(&self) -> Locale {
        match self.store.load(&self.config.storage_key) {
            Some(code) => Locale::parse(&code, &self.config.rtl_languages).unwrap_or_else(|e| {
                warn!("Ignoring stored locale preference: {}", e);
                self.default_locale()
            }),
            None => self.default_locale(),
        }
    }

    fn default_locale(&self) -> Locale {
        Locale::parse(&self.config.default_locale, &self.config.rtl_languages).unwrap_or_default()
    }

    fn issue(&mut self, locale: Locale) -> LocaleRequest {
        self.latest_request += 1;
        LocaleRequest {
            seq: self.latest_request,
            locale,
        }
    }

    fn apply_translations(&mut self, table: &TranslationTable) -> usize {
        let mut replaced = 0;
        for (index, key) in self.page.translation_keys().iter().enumerate() {
            if let Some(text) = table.get(key) {
                self.page.set_translated_text(index, text);
                replaced += 1;
            }
        }
        replaced
    }
}

/// Fetches the translations for an issued request and applies them if the
/// request is still the latest one.
pub async fn load_locale<P, S, T>(
    controller: SharedController<P, S>,
    source: Rc<T>,
    request: LocaleRequest,
) -> Result<LocaleOutcome, LocaleError>
where
    P: Page,
    S: PreferenceStore,
    T: TranslationSource + ?Sized,
{
    let result = source.fetch(request.locale()).await;
    controller.borrow_mut().complete_locale(request, result)
}

pub async fn select_locale<P, S, T>(
    controller: SharedController<P, S>,
    source: Rc<T>,
    code: String,
) -> Result<LocaleOutcome, LocaleError>
where
    P: Page,
    S: PreferenceStore,
    T: TranslationSource + ?Sized,
{
    let request = controller.borrow_mut().request_locale(&code)?;
    load_locale(controller, source, request).await
}
