use crate::config::SiteConfig;

const GET_STARTED_DELAY_MS: u32 = 1000;

/// Call-to-action buttons that are not tab links, keyed by `data-action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteAction {
    GetStarted,
    ViewPricing,
}

/// What the page does when an action fires: optionally show a busy label
/// on the button, then after `delay_ms` alert `message` and restore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPlan<'a> {
    pub busy_label: Option<&'a str>,
    pub delay_ms: u32,
    pub message: &'a str,
}

impl SiteAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "get-started" => Some(SiteAction::GetStarted),
            "view-pricing" => Some(SiteAction::ViewPricing),
            _ => None,
        }
    }

    pub fn plan(self, config: &SiteConfig) -> ActionPlan<'_> {
        match self {
            SiteAction::GetStarted => ActionPlan {
                busy_label: Some(&config.loading_label),
                delay_ms: GET_STARTED_DELAY_MS,
                message: &config.get_started_message,
            },
            SiteAction::ViewPricing => ActionPlan {
                busy_label: None,
                delay_ms: 0,
                message: &config.pricing_message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        assert_eq!(SiteAction::parse("get-started"), Some(SiteAction::GetStarted));
        assert_eq!(SiteAction::parse(" view-pricing "), Some(SiteAction::ViewPricing));
        assert_eq!(SiteAction::parse("Get Started"), None);
        assert_eq!(SiteAction::parse(""), None);
    }

    #[test]
    fn get_started_holds_the_button() {
        let config = SiteConfig::default();
        let plan = SiteAction::GetStarted.plan(&config);
        assert_eq!(plan.busy_label, Some("Loading..."));
        assert_eq!(plan.delay_ms, 1000);
        assert_eq!(plan.message, config.get_started_message);
    }

    #[test]
    fn pricing_alerts_immediately() {
        let mut config = SiteConfig::default();
        config.pricing_message = "Plans start at $49".to_string();
        let plan = SiteAction::ViewPricing.plan(&config);
        assert_eq!(plan.busy_label, None);
        assert_eq!(plan.delay_ms, 0);
        assert_eq!(plan.message, "Plans start at $49");
    }
}
