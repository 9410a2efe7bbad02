use std::collections::HashMap;

use futures::future::LocalBoxFuture;

use crate::error::LocaleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// A validated locale code and the text direction it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
    direction: Direction,
}

impl Locale {
    /// Accepts codes like `en`, `pt-BR` or `zh_Hant`. The code ends up in a
    /// request path, so anything beyond ASCII alphanumerics, `-` and `_`
    /// is rejected.
    pub fn parse(code: &str, rtl_languages: &[String]) -> Result<Self, LocaleError> {
        let code = code.trim();
        let valid = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LocaleError::InvalidCode(code.to_string()));
        }

        let language = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();
        let direction = if rtl_languages.iter().any(|l| l.eq_ignore_ascii_case(&language)) {
            Direction::Rtl
        } else {
            Direction::Ltr
        };

        Ok(Self {
            code: code.to_string(),
            direction,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            code: "en".to_string(),
            direction: Direction::Ltr,
        }
    }
}

/// Flat key to display string mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Only a JSON object whose values are all strings is accepted.
    pub fn from_json(raw: &str) -> Result<Self, LocaleError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|e| LocaleError::Malformed(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Where translation tables come from.
pub trait TranslationSource {
    fn fetch(&self, locale: &Locale) -> LocalBoxFuture<'static, Result<TranslationTable, LocaleError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rtl() -> Vec<String> {
        vec!["ar".to_string(), "he".to_string()]
    }

    #[test]
    fn direction_follows_base_language() {
        assert_eq!(Locale::parse("ar", &rtl()).unwrap().direction(), Direction::Rtl);
        assert_eq!(Locale::parse("ar-EG", &rtl()).unwrap().direction(), Direction::Rtl);
        assert_eq!(Locale::parse("HE", &rtl()).unwrap().direction(), Direction::Rtl);
        assert_eq!(Locale::parse("en", &rtl()).unwrap().direction(), Direction::Ltr);
        assert_eq!(Locale::parse("fr_CA", &rtl()).unwrap().direction(), Direction::Ltr);
    }

    #[test]
    fn rejects_codes_unfit_for_a_path() {
        for code in ["", "  ", "../secrets", "en/../ar", "e n", "fr.json"] {
            assert!(
                matches!(Locale::parse(code, &rtl()), Err(LocaleError::InvalidCode(_))),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn table_requires_flat_string_map() {
        let table = TranslationTable::from_json(r#"{"nav.about": "About Us", "nav.contact": "Contact"}"#)
            .unwrap();
        assert_eq!(table.get("nav.about"), Some("About Us"));
        assert_eq!(table.len(), 2);

        assert!(TranslationTable::from_json(r#"["About"]"#).is_err());
        assert!(TranslationTable::from_json(r#"{"nav": {"about": "About"}}"#).is_err());
        assert!(TranslationTable::from_json(r#"{"count": 3}"#).is_err());
        assert!(TranslationTable::from_json("<html>").is_err());
    }

    #[test]
    fn shipped_language_files_parse() {
        for raw in [
            include_str!("../languages/en.json"),
            include_str!("../languages/ar.json"),
            include_str!("../languages/fr.json"),
        ] {
            let table = TranslationTable::from_json(raw).unwrap();
            assert!(table.get("nav.about").is_some());
        }
    }
}
