//! reCAPTCHA v2 checkbox widget.
//!
//! The script is loaded in explicit-render mode and the widget is rendered
//! into this component's container with `grecaptcha.render`, so it also
//! appears when the section mounts after a client-side navigation. The
//! widget reports through global JavaScript callbacks which are registered
//! on mount and removed again when the component unmounts.

#[cfg(test)]
#[path = "captcha_test.rs"]
mod captcha_test;

use leptos::prelude::*;

pub const TOKEN_CALLBACK: &str = "onEnquiryCaptchaToken";
pub const EXPIRED_CALLBACK: &str = "onEnquiryCaptchaExpired";
pub const LOAD_CALLBACK: &str = "onEnquiryCaptchaLoad";
pub const SCRIPT_SRC: &str = "https://www.google.com/recaptcha/api.js?onload=onEnquiryCaptchaLoad&render=explicit";

/// Whether the widget should be reset: the token went from present to empty.
pub fn needs_reset(previously_present: Option<bool>, present: bool) -> bool {
    previously_present == Some(true) && !present
}

/// Whether the widget can be rendered now. Rendering happens once, after
/// both the container and `grecaptcha.render` are available.
pub fn needs_render(rendered: bool, container_mounted: bool, api_ready: bool) -> bool {
    !rendered && container_mounted && api_ready
}

/// A JavaScript global pointing at a Rust closure; removed on drop.
#[cfg(feature = "hydrate")]
struct GlobalCallback {
    name: &'static str,
    _closure: wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue)>,
}

#[cfg(feature = "hydrate")]
impl GlobalCallback {
    fn register(name: &'static str, f: impl FnMut(wasm_bindgen::JsValue) + 'static) -> Self {
        use wasm_bindgen::JsValue;
        let closure = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(f);
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref());
        }
        Self { name, _closure: closure }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for GlobalCallback {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(&window, &wasm_bindgen::JsValue::from_str(self.name));
        }
    }
}

/// `grecaptcha.<name>` with its receiver, once the API has loaded.
#[cfg(feature = "hydrate")]
fn grecaptcha_method(name: &str) -> Option<(wasm_bindgen::JsValue, js_sys::Function)> {
    use wasm_bindgen::{JsCast as _, JsValue};

    let window = web_sys::window()?;
    let grecaptcha = js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|g| !g.is_undefined())?;
    let method = js_sys::Reflect::get(&grecaptcha, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    Some((grecaptcha, method))
}

/// Render the checkbox into `container`; returns the widget id.
#[cfg(feature = "hydrate")]
fn render_widget(container: &web_sys::HtmlDivElement, site_key: &str) -> Option<wasm_bindgen::JsValue> {
    use wasm_bindgen::JsValue;

    let (grecaptcha, render) = grecaptcha_method("render")?;
    let params = js_sys::Object::new();
    for (key, value) in [("sitekey", site_key), ("callback", TOKEN_CALLBACK), ("expired-callback", EXPIRED_CALLBACK)] {
        js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value)).ok()?;
    }
    let container: &JsValue = container.as_ref();
    match render.call2(&grecaptcha, container, &params) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("reCAPTCHA render failed: {e:?}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn reset_widget(widget_id: &wasm_bindgen::JsValue) {
    if let Some((grecaptcha, reset)) = grecaptcha_method("reset") {
        let _ = reset.call1(&grecaptcha, widget_id);
    }
}

/// CAPTCHA widget. `token` is the parent's current token; when it is
/// cleared after a successful submission the widget is reset.
#[component]
pub fn Captcha(#[prop(into)] token: Signal<String>, on_token: Callback<String>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let api_ready = RwSignal::new(grecaptcha_method("render").is_some());
        let widget_id = StoredValue::new_local(None::<wasm_bindgen::JsValue>);

        // Owned by the component; dropping them on unmount unregisters the globals.
        let _callbacks = StoredValue::new_local(vec![
            GlobalCallback::register(TOKEN_CALLBACK, move |value| {
                on_token.run(value.as_string().unwrap_or_default());
            }),
            GlobalCallback::register(EXPIRED_CALLBACK, move |_| on_token.run(String::new())),
            GlobalCallback::register(LOAD_CALLBACK, move |_| api_ready.set(true)),
        ]);

        Effect::new(move || {
            let ready = api_ready.get();
            let element = container.get();
            let rendered = widget_id.with_value(Option::is_some);
            if !needs_render(rendered, element.is_some(), ready) {
                return;
            }
            let (Some(element), Some(site_key)) = (element, crate::config::recaptcha_site_key()) else {
                return;
            };
            if let Some(id) = render_widget(&element, site_key) {
                widget_id.set_value(Some(id));
            }
        });

        Effect::new(move |previous: Option<bool>| {
            let present = !token.get().is_empty();
            if needs_reset(previous, present) {
                widget_id.with_value(|id| {
                    if let Some(id) = id {
                        reset_widget(id);
                    }
                });
            }
            present
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (token, on_token);

    if crate::config::recaptcha_site_key().is_some() {
        view! {
            <leptos_meta::Script src=SCRIPT_SRC async_="true" defer="true"/>
            <div class="captcha" node_ref=container></div>
        }
        .into_any()
    } else {
        view! { <p class="captcha captcha--unconfigured">"Verification is not configured."</p> }.into_any()
    }
}
