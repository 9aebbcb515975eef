use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::Site;
use crate::contact::{self, ContactMessage, FormStatus};
use crate::error::ContactError;

const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";

/// Banner text for a failed submit: validation problems verbatim, relay failures generic.
pub fn failure_banner(err: ContactError) -> String {
    match err {
        ContactError::Validation(msg) => msg,
        _ => FAILURE_MESSAGE.to_string(),
    }
}

/// Only the newest banner's timer may clear it; older timers from earlier submits are ignored.
pub fn should_dismiss(status: &FormStatus, scheduled: u32, latest: u32) -> bool {
    scheduled == latest && status.is_transient()
}

/// Browser timeout delay for `ms`, saturating instead of wrapping negative.
pub fn timeout_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Return a `Sent`/`Failed` banner to `Idle` after `ms`, unless a newer banner replaced it.
fn dismiss_after(
    ms: u32,
    set_status: WriteSignal<FormStatus>,
    generation: StoredValue<u32>,
    scheduled: u32,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = wasm_bindgen::closure::Closure::once(move || {
        let latest = generation.get_value();
        set_status.update(|status| {
            if should_dismiss(status, scheduled, latest) {
                *status = FormStatus::Idle;
            }
        });
    });

    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        timeout_delay(ms),
    ) {
        Ok(_) => callback.forget(),
        Err(_) => tracing::warn!("Could not schedule contact banner dismissal"),
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let site = expect_context::<Site>();
    let relay = site.config.contact.clone();
    let flash_ms = site.config.flash_ms;

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);
    let generation = StoredValue::new(0u32);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }

        let outgoing = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let relay = relay.clone();

        set_status.set(FormStatus::Sending);
        spawn_local(async move {
            match contact::send_message(&relay, &outgoing).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_status.set(FormStatus::Sent);
                }
                Err(e) => {
                    tracing::error!("Contact form failed: {}", e);
                    set_status.set(FormStatus::Failed(failure_banner(e)));
                }
            }
            generation.update_value(|g| *g = g.wrapping_add(1));
            dismiss_after(flash_ms, set_status, generation, generation.get_value());
        });
    };

    let sending = move || status.get().is_sending();
    let sent = Memo::new(move |_| status.get() == FormStatus::Sent);

    view! {
        <div class="contact-form-card">
            {move || {
                if sent.get() {
                    view! {
                        <div class="contact-success">
                            <span class="success-icon">"\u{2713}"</span>
                            <h3>"Message Sent!"</h3>
                            <p>"Thanks for reaching out. I'll get back to you soon."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <form class="contact-form" on:submit=submit.clone()>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="contact-name">"Your Name"</label>
                                    <input
                                        id="contact-name"
                                        name="name"
                                        type="text"
                                        class="input"
                                        placeholder="Jane Doe"
                                        required=true
                                        disabled=sending
                                        prop:value=move || name.get()
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="contact-email">"Your Email"</label>
                                    <input
                                        id="contact-email"
                                        name="email"
                                        type="email"
                                        class="input"
                                        placeholder="jane@example.com"
                                        required=true
                                        disabled=sending
                                        prop:value=move || email.get()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                            <div class="form-group">
                                <label for="contact-subject">"Subject"</label>
                                <input
                                    id="contact-subject"
                                    name="subject"
                                    type="text"
                                    class="input"
                                    placeholder="Project inquiry"
                                    required=true
                                    disabled=sending
                                    prop:value=move || subject.get()
                                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="contact-message">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    rows="5"
                                    class="input"
                                    placeholder="Tell me about your project..."
                                    required=true
                                    disabled=sending
                                    prop:value=move || message.get()
                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <Show when=move || status.get().error().is_some()>
                                <div class="error-banner">
                                    {move || status.get().error().map(str::to_string).unwrap_or_default()}
                                </div>
                            </Show>

                            <button type="submit" class="btn btn-primary btn-block" disabled=sending>
                                {move || if sending() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
