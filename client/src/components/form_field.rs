//! Generic controlled form control: text, email, textarea, number or select.
//!
//! DESIGN
//! ======
//! Every kind reports edits through one `on_change` callback carrying a
//! normalized [`FieldChange`]. The select kind is a custom dropdown whose
//! outside-click listener is held by an [`OutsideClickGuard`]: the listener
//! exists only while the list is open and is removed when the guard drops,
//! which also happens when the control unmounts.
//!
//! Number fields filter twice: keydown blocks non-digit keys, and the input
//! handler strips non-digits so pasted or programmatic input is covered too.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use super::icons::{Icon, IconKind, icon_for_field};
use crate::state::dropdown::DropdownState;

/// Editing keys a number field accepts besides digits.
pub const NUMERIC_ALLOWED_KEYS: [&str; 9] = [
    "Backspace",
    "Delete",
    "Tab",
    "Escape",
    "Enter",
    "ArrowLeft",
    "ArrowRight",
    "Home",
    "End",
];

/// Rendered control variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
    Number,
    Select,
}

impl FieldKind {
    /// `type` attribute for `<input>` kinds.
    ///
    /// Number fields render as text with a numeric input mode so the browser
    /// never swallows a partially typed value.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text | Self::Number | Self::Textarea | Self::Select => "text",
        }
    }
}

/// One selectable dropdown entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Normalized edit emitted by [`FormField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub name: &'static str,
    pub value: String,
}

/// Whether a keydown may reach a number field.
pub fn numeric_key_allowed(key: &str, shift: bool, ctrl: bool, alt: bool) -> bool {
    if NUMERIC_ALLOWED_KEYS.contains(&key) {
        return true;
    }
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit()) && !shift && !ctrl && !alt
}

/// Drop every non-ASCII-digit character.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Apply the per-kind input filter to a raw control value.
pub fn normalize_input(kind: FieldKind, raw: String) -> String {
    match kind {
        FieldKind::Number => strip_non_digits(&raw),
        _ => raw,
    }
}

/// Label shown on the dropdown button for `value`.
pub fn selected_label<'a>(options: &'a [SelectOption], value: &str, placeholder: &'a str) -> &'a str {
    options
        .iter()
        .find(|opt| opt.value == value)
        .map_or(placeholder, |opt| opt.label)
}

fn wrapper_class(disabled: bool, has_error: bool) -> String {
    let mut class = String::from("form-field__control");
    if disabled {
        class.push_str(" form-field__control--disabled");
    }
    class.push_str(if has_error { " form-field__control--error" } else { " form-field__control--ok" });
    class
}

/// Controlled form control with an inline error line.
#[component]
pub fn FormField(
    kind: FieldKind,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<FieldChange>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    #[prop(optional)] options: &'static [SelectOption],
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] error: Option<Signal<String>>,
) -> impl IntoView {
    let is_disabled = move || disabled.is_some_and(|d| d.get());
    let error_text = move || error.map(|e| e.get()).unwrap_or_default();
    let has_error = move || !error_text().is_empty();
    let icon = icon_for_field(name);

    let control = match kind {
        FieldKind::Select => view! {
            <SelectDropdown
                name=name
                value=value
                on_change=on_change
                placeholder=placeholder
                options=options
                icon=icon
                disabled=Signal::derive(is_disabled)
                has_error=Signal::derive(has_error)
            />
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <div class=move || wrapper_class(is_disabled(), has_error())>
                {icon.map(|kind| view! { <Icon kind=kind class="form-field__icon"/> })}
                <textarea
                    class="form-field__input form-field__input--textarea"
                    name=name
                    rows="4"
                    placeholder=placeholder
                    disabled=is_disabled
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        on_change.run(FieldChange { name, value: event_target_value(&ev) });
                    }
                ></textarea>
            </div>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email | FieldKind::Number => {
            let numeric = kind == FieldKind::Number;
            view! {
                <div class=move || wrapper_class(is_disabled(), has_error())>
                    {icon.map(|kind| view! { <Icon kind=kind class="form-field__icon"/> })}
                    <input
                        class="form-field__input"
                        class:form-field__input--numeric=numeric
                        type=kind.input_type()
                        name=name
                        placeholder=placeholder
                        disabled=is_disabled
                        inputmode=numeric.then_some("numeric")
                        pattern=numeric.then_some("[0-9]*")
                        prop:value=move || value.get()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if numeric && !numeric_key_allowed(&ev.key(), ev.shift_key(), ev.ctrl_key(), ev.alt_key()) {
                                ev.prevent_default();
                            }
                        }
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            #[cfg(feature = "hydrate")]
                            let filtered = numeric && !raw.chars().all(|c| c.is_ascii_digit());
                            let normalized = normalize_input(kind, raw);
                            #[cfg(feature = "hydrate")]
                            {
                                // Controlled value may be unchanged, so rewrite the DOM directly.
                                if filtered {
                                    event_target::<web_sys::HtmlInputElement>(&ev).set_value(&normalized);
                                }
                            }
                            on_change.run(FieldChange { name, value: normalized });
                        }
                        on:click=move |ev| {
                            if let Some(on_click) = on_click.as_ref() {
                                on_click.run(ev);
                            }
                        }
                    />
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            {control}
            <Show when=has_error>
                <p class="form-field__error">{error_text}</p>
            </Show>
        </div>
    }
}

/// Owns the window `mousedown` listener of an open dropdown.
///
/// Dropping the guard removes the listener. The guard sits in a
/// `StoredValue` owned by the dropdown, so unmounting drops it as well.
#[cfg(feature = "hydrate")]
struct OutsideClickGuard(Option<Box<dyn FnOnce()>>);

#[cfg(feature = "hydrate")]
impl OutsideClickGuard {
    fn install(root: NodeRef<leptos::html::Div>, state: RwSignal<DropdownState>) -> Self {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !event_inside(root, &ev) {
                state.update(|s| *s = s.dismiss());
            }
        });
        Self(Some(Box::new(move || handle.remove())))
    }
}

#[cfg(feature = "hydrate")]
impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Some(remove) = self.0.take() {
            remove();
        }
    }
}

#[cfg(feature = "hydrate")]
fn event_inside(root: NodeRef<leptos::html::Div>, ev: &web_sys::MouseEvent) -> bool {
    use wasm_bindgen::JsCast as _;

    let Some(container) = root.get_untracked() else {
        return false;
    };
    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    container.contains(target.as_ref())
}

#[component]
fn SelectDropdown(
    name: &'static str,
    value: Signal<String>,
    on_change: Callback<FieldChange>,
    placeholder: String,
    options: &'static [SelectOption],
    icon: Option<IconKind>,
    disabled: Signal<bool>,
    has_error: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::Closed);
    let root = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let guard = StoredValue::new_local(None::<OutsideClickGuard>);
        Effect::new(move || {
            if state.get().is_open() {
                if guard.with_value(Option::is_none) {
                    guard.set_value(Some(OutsideClickGuard::install(root, state)));
                }
            } else {
                guard.set_value(None);
            }
        });
    }

    let label = move || selected_label(options, &value.get(), &placeholder).to_owned();

    view! {
        <div
            class="form-field__dropdown"
            node_ref=root
            data-state=move || state.get().phase(&value.get()).as_str()
        >
            <div class=move || wrapper_class(disabled.get(), has_error.get())>
                {icon.map(|kind| view! { <Icon kind=kind class="form-field__icon"/> })}
                <button
                    type="button"
                    class="form-field__select"
                    name=name
                    aria-haspopup="listbox"
                    aria-expanded=move || state.get().is_open().to_string()
                    disabled=move || disabled.get()
                    on:click=move |_| state.update(|s| *s = s.toggle(disabled.get_untracked()))
                >
                    <span>{label}</span>
                    <span class="form-field__chevron" class:form-field__chevron--open=move || state.get().is_open()>
                        <Icon kind=IconKind::ChevronDown/>
                    </span>
                </button>
            </div>
            <Show when=move || state.get().is_open()>
                <ul class="form-field__options" role="listbox">
                    {options
                        .iter()
                        .map(|opt| {
                            let opt = *opt;
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="form-field__option"
                                        class:form-field__option--selected=move || value.get() == opt.value
                                        role="option"
                                        on:click=move |_| {
                                            if disabled.get_untracked() {
                                                return;
                                            }
                                            on_change.run(FieldChange { name, value: opt.value.to_owned() });
                                            state.update(|s| *s = s.select());
                                        }
                                    >
                                        {opt.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
