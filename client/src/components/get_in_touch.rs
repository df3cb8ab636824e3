//! "Reach out to us" lead-capture section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the [`EnquiryState`] for its lifetime. Submission validates locally,
//! then hands the request to [`submit_enquiry`](crate::net::api::submit_enquiry)
//! on a spawned task. A completion that lands after the section unmounted is
//! dropped instead of touching disposed signals.

#[cfg(test)]
#[path = "get_in_touch_test.rs"]
mod get_in_touch_test;

use leptos::prelude::*;

use super::button::Button;
use super::captcha::Captcha;
use super::form_field::{FieldChange, FieldKind, FormField, SelectOption};
use super::icons::IconKind;
use super::thank_you_modal::ThankYouModal;
use super::title_description::TitleDescription;
use crate::net::api::EnquiryError;
use crate::state::enquiry::{EnquiryField, EnquiryState};
use crate::util::location::current_href;

pub const SERVICE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "localMove", label: "Local Move" },
    SelectOption { value: "internationalMove", label: "International Move" },
    SelectOption { value: "carExport", label: "Car Import and Export" },
    SelectOption { value: "storageServices", label: "Storage Services" },
    SelectOption { value: "logistics", label: "Logistics" },
];

const IMAGE_TOP: &str = "/assets/getintouch.webp";
const IMAGE_BOTTOM: &str = "/assets/getintouch2.webp";

/// Apply a control edit to the form state. Unknown control names are ignored.
pub fn apply_change(state: &mut EnquiryState, change: FieldChange) -> bool {
    match change.name.parse::<EnquiryField>() {
        Ok(field) => {
            state.set_field(field, change.value);
            true
        }
        Err(_) => false,
    }
}

/// Apply the outcome of a submission request.
///
/// Returns `false` when the outcome was dropped because the section is no
/// longer mounted or no request was in flight.
pub fn finish_submission(
    state: &mut EnquiryState,
    mounted: bool,
    result: Result<String, EnquiryError>,
    location: &str,
) -> bool {
    if !mounted {
        #[cfg(feature = "hydrate")]
        log::debug!("enquiry completed after section unmounted; ignoring");
        return false;
    }
    if !state.is_submitting() {
        return false;
    }
    match result {
        Ok(body) => {
            #[cfg(feature = "hydrate")]
            log::info!("enquiry submitted: {body}");
            #[cfg(not(feature = "hydrate"))]
            let _ = body;
            state.complete_success(location);
        }
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("enquiry submission failed: {e}");
            state.complete_failure(e.user_message());
        }
    }
    true
}

#[component]
pub fn GetInTouchSection() -> impl IntoView {
    let state = RwSignal::new(EnquiryState::new(&current_href()));

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_change = Callback::new(move |change: FieldChange| {
        state.update(|s| {
            if !apply_change(s, change) {
                #[cfg(feature = "hydrate")]
                log::warn!("ignoring change for unknown enquiry field");
            }
        });
    });
    let on_token = Callback::new(move |token: String| state.update(|s| s.set_captcha_token(token)));
    let on_close = Callback::new(move |()| state.update(EnquiryState::dismiss_confirmation));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = state.try_update(EnquiryState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_enquiry(&request).await;
                let mounted = alive.load(std::sync::atomic::Ordering::Relaxed);
                // A disposed signal turns this into a no-op.
                let _ = state.try_update(|s| finish_submission(s, mounted, result, &current_href()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let value_of = move |field: EnquiryField| Signal::derive(move || state.with(|s| s.form.value(field).to_owned()));
    let error_of = move |field: EnquiryField| Signal::derive(move || state.with(|s| s.errors.get(field).to_owned()));
    let submitting = Signal::derive(move || state.with(EnquiryState::is_submitting));
    let captcha_message = move || state.with(|s| s.captcha_slot_message().map(str::to_owned));

    view! {
        <section class="get-in-touch">
            <div class="get-in-touch__form-column">
                <TitleDescription
                    title="Reach Out to Us"
                    description="For any inquiries or further assistance, please feel free to contact us. Our team is ready to provide you with prompt and professional support."
                    title_class="get-in-touch__title"
                    description_class="get-in-touch__description"
                />
                <form class="get-in-touch__form" on:submit=on_submit novalidate=true>
                    <FormField
                        kind=FieldKind::Text
                        name=EnquiryField::FullName.name()
                        placeholder="Name"
                        value=value_of(EnquiryField::FullName)
                        error=error_of(EnquiryField::FullName)
                        on_change=on_change
                    />
                    <FormField
                        kind=FieldKind::Number
                        name=EnquiryField::PhoneNumber.name()
                        placeholder="Phone number"
                        value=value_of(EnquiryField::PhoneNumber)
                        error=error_of(EnquiryField::PhoneNumber)
                        on_change=on_change
                    />
                    <FormField
                        kind=FieldKind::Email
                        name=EnquiryField::Email.name()
                        placeholder="Email"
                        value=value_of(EnquiryField::Email)
                        error=error_of(EnquiryField::Email)
                        on_change=on_change
                    />
                    <FormField
                        kind=FieldKind::Select
                        name=EnquiryField::ServiceType.name()
                        placeholder="Service type"
                        options=SERVICE_OPTIONS
                        value=value_of(EnquiryField::ServiceType)
                        error=error_of(EnquiryField::ServiceType)
                        on_change=on_change
                    />
                    <FormField
                        kind=FieldKind::Textarea
                        name=EnquiryField::Message.name()
                        placeholder="Message"
                        value=value_of(EnquiryField::Message)
                        error=error_of(EnquiryField::Message)
                        on_change=on_change
                    />
                    <div class="get-in-touch__captcha">
                        <Captcha
                            token=Signal::derive(move || state.with(|s| s.captcha_token.clone()))
                            on_token=on_token
                        />
                        {move || captcha_message().map(|message| view! { <p class="form-field__error">{message}</p> })}
                    </div>
                    <Button
                        label="Submit"
                        loading_label="Submitting"
                        icon=IconKind::ArrowUpRight
                        class="get-in-touch__submit"
                        submit=true
                        loading=submitting
                    />
                </form>
            </div>
            <div class="get-in-touch__images" aria-hidden="true">
                <img class="get-in-touch__image get-in-touch__image--top" src=IMAGE_TOP alt="Get in touch top"/>
                <img class="get-in-touch__image get-in-touch__image--bottom" src=IMAGE_BOTTOM alt="Get in touch bottom"/>
            </div>
            <ThankYouModal open=Signal::derive(move || state.with(EnquiryState::confirmation_open)) on_close=on_close/>
        </section>
    }
}
