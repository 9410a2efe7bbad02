use crate::i18n::Direction;

/// The slice of the document the navigation controller reads and writes.
///
/// The browser implementation lives in `web::page`; tests drive the
/// controller through an in-memory fake.
pub trait Page {
    /// `data-tab` values of the tab triggers, in document order.
    fn trigger_ids(&self) -> Vec<String>;
    /// Ids of the tab panes, in document order.
    fn pane_ids(&self) -> Vec<String>;
    /// Marks the trigger(s) and pane for `id` active or inactive.
    fn set_tab_active(&mut self, id: &str, active: bool);

    /// Current fragment identifier without the leading `#`.
    fn fragment(&self) -> Option<String>;
    /// Rewrites the fragment in place: no new history entry, no scroll.
    fn replace_fragment(&mut self, id: &str);

    fn set_direction(&mut self, direction: Direction, lang: &str);

    /// `data-i18n` keys of the translatable elements, in document order.
    fn translation_keys(&self) -> Vec<String>;
    /// Replaces the text of the translatable element at `index`.
    fn set_translated_text(&mut self, index: usize, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub id: String,
    pub trigger_exists: bool,
    pub pane_exists: bool,
}

impl TabEntry {
    pub fn is_selectable(&self) -> bool {
        self.trigger_exists && self.pane_exists
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRegistry {
    entries: Vec<TabEntry>,
}

impl TabRegistry {
    /// Triggers first (first occurrence of an id wins), then panes that have
    /// no trigger.
    pub fn discover<P: Page + ?Sized>(page: &P) -> Self {
        let panes = page.pane_ids();
        let mut entries: Vec<TabEntry> = Vec::new();

        for id in page.trigger_ids() {
            if id.is_empty() || entries.iter().any(|e| e.id == id) {
                continue;
            }
            let pane_exists = panes.contains(&id);
            entries.push(TabEntry {
                id,
                trigger_exists: true,
                pane_exists,
            });
        }

        for id in panes {
            if id.is_empty() || entries.iter().any(|e| e.id == id) {
                continue;
            }
            entries.push(TabEntry {
                id,
                trigger_exists: false,
                pane_exists: true,
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_selectable(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id && e.is_selectable())
    }

    pub fn first_selectable(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.is_selectable())
            .map(|e| e.id.as_str())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashSet;

    use super::Page;
    use crate::i18n::Direction;

    /// In-memory document used to exercise the controller.
    #[derive(Debug, Default)]
    pub struct FakePage {
        pub triggers: Vec<String>,
        pub panes: Vec<String>,
        pub active: HashSet<String>,
        pub fragment: Option<String>,
        pub fragment_writes: usize,
        pub direction: Option<Direction>,
        pub lang: Option<String>,
        pub texts: Vec<(String, String)>,
    }

    impl FakePage {
        pub fn with_tabs(ids: &[&str]) -> Self {
            Self {
                triggers: ids.iter().map(|s| s.to_string()).collect(),
                panes: ids.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn at_fragment(mut self, fragment: &str) -> Self {
            self.fragment = Some(fragment.to_string());
            self
        }

        pub fn text(mut self, key: &str, text: &str) -> Self {
            self.texts.push((key.to_string(), text.to_string()));
            self
        }

        pub fn text_of(&self, key: &str) -> Option<&str> {
            self.texts
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, t)| t.as_str())
        }
    }

    impl Page for FakePage {
        fn trigger_ids(&self) -> Vec<String> {
            self.triggers.clone()
        }

        fn pane_ids(&self) -> Vec<String> {
            self.panes.clone()
        }

        fn set_tab_active(&mut self, id: &str, active: bool) {
            if active {
                self.active.insert(id.to_string());
            } else {
                self.active.remove(id);
            }
        }

        fn fragment(&self) -> Option<String> {
            self.fragment.clone()
        }

        fn replace_fragment(&mut self, id: &str) {
            self.fragment = Some(id.to_string());
            self.fragment_writes += 1;
        }

        fn set_direction(&mut self, direction: Direction, lang: &str) {
            self.direction = Some(direction);
            self.lang = Some(lang.to_string());
        }

        fn translation_keys(&self) -> Vec<String> {
            self.texts.iter().map(|(k, _)| k.clone()).collect()
        }

        fn set_translated_text(&mut self, index: usize, text: &str) {
            if let Some(entry) = self.texts.get_mut(index) {
                entry.1 = text.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakePage;
    use super::*;

    #[test]
    fn registry_merges_triggers_and_panes() {
        let page = FakePage {
            triggers: vec!["about".into(), "services".into(), "about".into(), "ghost".into()],
            panes: vec!["about".into(), "services".into(), "orphan".into()],
            ..FakePage::default()
        };
        let registry = TabRegistry::discover(&page);
        let ids: Vec<&str> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "services", "ghost", "orphan"]);

        assert!(registry.is_selectable("services"));
        assert!(!registry.is_selectable("ghost"));
        assert!(!registry.is_selectable("orphan"));
        assert!(!registry.is_selectable("missing"));
    }

    #[test]
    fn first_selectable_skips_incomplete_tabs() {
        let page = FakePage {
            triggers: vec!["ghost".into(), "contact".into()],
            panes: vec!["contact".into()],
            ..FakePage::default()
        };
        assert_eq!(TabRegistry::discover(&page).first_selectable(), Some("contact"));
        assert_eq!(TabRegistry::discover(&FakePage::default()).first_selectable(), None);
    }
}
