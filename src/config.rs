use serde::Deserialize;

/// Unknown tab ids are surfaced loudly while developing the markup.
#[cfg(debug_assertions)]
pub fn unknown_tab_level() -> log::Level {
    log::Level::Warn
}

#[cfg(not(debug_assertions))]
pub fn unknown_tab_level() -> log::Level {
    log::Level::Debug
}

/// Id of the optional inline JSON block that overrides [`SiteConfig`] fields.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleOption {
    pub code: String,
    pub label: String,
}

impl LocaleOption {
    fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub languages_path: String,
    pub default_locale: String,
    pub rtl_languages: Vec<String>,
    pub locales: Vec<LocaleOption>,
    pub trigger_selector: String,
    pub pane_selector: String,
    pub home_tab: String,
    pub switcher_host_id: String,
    pub reveal_selector: String,
    pub contact_form_selector: String,
    pub sending_label: String,
    pub thank_you_message: String,
    pub loading_label: String,
    pub get_started_message: String,
    pub pricing_message: String,
    pub logo_fallback_text: String,
    pub logo_fallback_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "preferredLanguage".to_string(),
            languages_path: "./languages".to_string(),
            default_locale: "en".to_string(),
            rtl_languages: ["ar", "he", "fa", "ur"].iter().map(|s| s.to_string()).collect(),
            locales: vec![
                LocaleOption::new("en", "English"),
                LocaleOption::new("ar", "العربية"),
                LocaleOption::new("fr", "Français"),
            ],
            trigger_selector: ".tab-btn[data-tab]".to_string(),
            pane_selector: ".tab-pane".to_string(),
            home_tab: "about".to_string(),
            switcher_host_id: "language-switcher".to_string(),
            reveal_selector: ".tab-pane section".to_string(),
            contact_form_selector: ".contact-form".to_string(),
            sending_label: "Sending...".to_string(),
            thank_you_message: "Thank you for your message! We will get back to you soon."
                .to_string(),
            loading_label: "Loading...".to_string(),
            get_started_message: "Welcome to Smart Automotive POS! Redirecting to signup..."
                .to_string(),
            pricing_message:
                "Pricing information will be displayed here. This feature is coming soon!"
                    .to_string(),
            logo_fallback_text: "Auto POS".to_string(),
            logo_fallback_title: "Smart Automotive POS".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses an override block. Missing fields keep their defaults; a
    /// broken block falls back to the defaults entirely.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed site config: {}", e);
                Self::default()
            }
        }
    }

    pub fn translation_url(&self, code: &str) -> String {
        format!("{}/{}.json", self.languages_path.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "home_tab": "services", "rtl_languages": ["ar"] }"#);
        assert_eq!(config.home_tab, "services");
        assert_eq!(config.rtl_languages, vec!["ar".to_string()]);
        assert_eq!(config.storage_key, "preferredLanguage");
        assert_eq!(config.locales.len(), 3);
        assert_eq!(config.loading_label, "Loading...");
        assert_eq!(config.logo_fallback_text, "Auto POS");
    }

    #[test]
    fn malformed_override_uses_defaults() {
        assert_eq!(SiteConfig::from_json("{ not json"), SiteConfig::default());
    }

    #[test]
    fn locales_override() {
        let config = SiteConfig::from_json(
            r#"{ "locales": [{ "code": "de", "label": "Deutsch" }] }"#,
        );
        assert_eq!(config.locales, vec![LocaleOption::new("de", "Deutsch")]);
    }

    #[test]
    fn translation_url_joins_path() {
        let mut config = SiteConfig::default();
        assert_eq!(config.translation_url("ar"), "./languages/ar.json");
        config.languages_path = "/static/i18n/".to_string();
        assert_eq!(config.translation_url("fr"), "/static/i18n/fr.json");
    }
}
