//! Pill button with an optional trailing icon and loading state.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use super::icons::{Icon, IconKind};

/// Label to show for the current loading state.
pub fn button_label(label: &'static str, loading_label: Option<&'static str>, loading: bool) -> &'static str {
    match loading_label {
        Some(busy) if loading => busy,
        _ => label,
    }
}

/// Pill-styled action: a link when `href` is set, otherwise a button that
/// submits its form (`submit`) or does nothing on its own.
///
/// While `loading` is true the button is disabled and the icon is hidden.
#[component]
pub fn Button(
    label: &'static str,
    #[prop(optional)] loading_label: Option<&'static str>,
    #[prop(optional)] icon: Option<IconKind>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] submit: bool,
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional)] loading: Option<Signal<bool>>,
) -> impl IntoView {
    let is_loading = move || loading.is_some_and(|l| l.get());
    let content = move || {
        view! {
            <span>{move || button_label(label, loading_label, is_loading())}</span>
            {move || {
                icon.filter(|_| !is_loading())
                    .map(|kind| view! { <Icon kind=kind size=18 class="btn__icon"/> })
            }}
        }
    };

    match href {
        Some(href) => view! { <a class=format!("btn {class}") href=href>{content()}</a> }.into_any(),
        None => view! {
            <button
                type=if submit { "submit" } else { "button" }
                class=format!("btn {class}")
                class:btn--loading=is_loading
                disabled=is_loading
                aria-busy=move || is_loading().to_string()
            >
                {content()}
            </button>
        }
        .into_any(),
    }
}
