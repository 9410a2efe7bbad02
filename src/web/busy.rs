use gloo_timers::callback::Timeout;
use web_sys::{HtmlButtonElement, Window};

/// Disables `button` under `busy_label` (if any), then after `delay_ms`
/// alerts `message`, runs `after` and restores the button.
pub fn hold_then_alert<F>(
    window: &Window,
    button: Option<HtmlButtonElement>,
    busy_label: Option<&str>,
    delay_ms: u32,
    message: String,
    after: F,
) where
    F: FnOnce() + 'static,
{
    let original_label = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();
    if let (Some(button), Some(label)) = (&button, busy_label) {
        button.set_text_content(Some(label));
        button.set_disabled(true);
    }

    let window = window.clone();
    let held = busy_label.is_some();
    Timeout::new(delay_ms, move || {
        let _ = window.alert_with_message(&message);
        after();
        if let (Some(button), true) = (button, held) {
            button.set_text_content(Some(&original_label));
            button.set_disabled(false);
        }
    })
    .forget();
}
