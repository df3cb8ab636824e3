//! Confirmation dialog shown after an enquiry is accepted.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};

pub const THANK_YOU_TITLE: &str = "Thank you!";
pub const THANK_YOU_MESSAGE: &str =
    "Your enquiry has been received. A member of our team will contact you shortly.";

/// Modal closable via its button, a backdrop click, or Escape.
#[component]
pub fn ThankYouModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--thank-you"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="dialog__badge">
                        <Icon kind=IconKind::Check size=32/>
                    </div>
                    <h2>{THANK_YOU_TITLE}</h2>
                    <p class="dialog__message">{THANK_YOU_MESSAGE}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
