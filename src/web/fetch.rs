use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;

use crate::config::SiteConfig;
use crate::error::LocaleError;
use crate::i18n::{Locale, TranslationSource, TranslationTable};

/// Loads `<languages_path>/<code>.json` from the site's origin.
pub struct HttpTranslationSource {
    config: SiteConfig,
}

impl HttpTranslationSource {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

impl TranslationSource for HttpTranslationSource {
    fn fetch(&self, locale: &Locale) -> LocalBoxFuture<'static, Result<TranslationTable, LocaleError>> {
        let url = self.config.translation_url(locale.code());
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| LocaleError::Request {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;
            if !response.ok() {
                return Err(LocaleError::Status {
                    url,
                    status: response.status(),
                });
            }
            let body = response.text().await.map_err(|e| LocaleError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;
            TranslationTable::from_json(&body)
        }
        .boxed_local()
    }
}
