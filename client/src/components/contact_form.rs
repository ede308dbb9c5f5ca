//! Contact form widget.
//!
//! ERROR HANDLING
//! ==============
//! Missing required fields raise an error toast and never reach the network.
//! A failed submission raises a generic error toast and keeps what the user
//! typed so they can retry.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::api;
use crate::state::contact_form::{
    ContactFormState, FAILURE_MESSAGE, FormField, SUCCESS_MESSAGE, SubmitBlocked, VALIDATION_MESSAGE,
};
use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn ContactForm(
    #[prop(into, default = "Plan Your Next Trip".to_owned())] title: String,
    /// Prefill for the destination field, e.g. from a hotel page.
    #[prop(optional, into)]
    destination: Option<String>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ContactFormState::default());
    if let Some(destination) = destination {
        form.update(|f| f.set(FormField::Destination, destination));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactFormState::begin_submit) {
            Some(Ok(record)) => {
                leptos::task::spawn_local(async move {
                    let result = api::submit_contact(&record).await;
                    #[cfg(feature = "hydrate")]
                    if let Err(e) = &result {
                        log::warn!("contact submission failed: {e}");
                    }
                    let succeeded = result.is_ok();
                    let _ = form.try_update(|f| f.finish_submit(succeeded));
                    if succeeded {
                        notify(toasts, ToastKind::Success, SUCCESS_MESSAGE);
                    } else {
                        notify(toasts, ToastKind::Error, FAILURE_MESSAGE);
                    }
                });
            }
            Some(Err(SubmitBlocked::Invalid(_))) => notify(toasts, ToastKind::Error, VALIDATION_MESSAGE),
            Some(Err(SubmitBlocked::InFlight)) | None => {}
        }
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <section class="section contact-section" id="contact">
            <h2 class="section-heading__title">{title}</h2>
            <form class="contact-form" on:submit=on_submit novalidate=true>
                <div class="contact-form__row">
                    <FormInput form=form field=FormField::Name label="Full name" required=true/>
                    <FormInput form=form field=FormField::Email label="Email" input_type="email" required=true/>
                </div>
                <div class="contact-form__row">
                    <FormInput form=form field=FormField::Phone label="Phone" input_type="tel"/>
                    <FormInput form=form field=FormField::Destination label="Dream destination"/>
                </div>
                <label class="contact-form__field">
                    <span>"Message *"</span>
                    <textarea
                        rows="5"
                        aria-required="true"
                        prop:value=move || form.with(|f| f.value(FormField::Message).to_owned())
                        on:input=move |ev| form.update(|f| f.set(FormField::Message, event_target_value(&ev)))
                        disabled=submitting
                    ></textarea>
                </label>
                <button class="btn contact-form__submit" type="submit" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactFormState>,
    field: FormField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="contact-form__field">
            <span>{label}{required.then_some(" *")}</span>
            <input
                type=input_type
                aria-required=if required { "true" } else { "false" }
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                disabled=move || form.with(|f| f.submitting)
            />
        </label>
    }
}
