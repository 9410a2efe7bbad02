use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::LocaleOption;

#[derive(Properties, PartialEq)]
pub struct LocaleSwitcherProps {
    pub locales: Vec<LocaleOption>,
    pub current: String,
    pub on_select: Callback<String>,
}

#[function_component(LocaleSwitcher)]
pub fn locale_switcher(props: &LocaleSwitcherProps) -> Html {
    let selected = use_state(|| props.current.clone());

    let onchange = {
        let selected = selected.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let code = select.value();
            selected.set(code.clone());
            on_select.emit(code);
        })
    };

    html! {
        <select class="language-select" aria-label="Language" {onchange}>
            { for props.locales.iter().map(|locale| html! {
                <option value={locale.code.clone()} selected={*selected == locale.code}>
                    { locale.label.clone() }
                </option>
            }) }
        </select>
    }
}
