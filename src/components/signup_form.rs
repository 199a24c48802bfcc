//! Registration form: ID, password (with live policy feedback), optional
//! email.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ApiConfig;
use crate::state::signup::SignupState;
use crate::util::notify::Notifier;

/// Sign-up form.
///
/// Password policy feedback is live: a criteria checklist renders while the
/// password input is focused and at least one criterion is unmet, and the
/// inline message appears once the password meets the whole policy (the
/// message slot doubles as the required-fields warning on submit). The
/// submit button is disabled while a request is in flight.
#[component]
pub fn SignupForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let notifier = expect_context::<Arc<dyn Notifier>>();

    let state = RwSignal::new(SignupState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut request = None;
        state.update(|s| request = s.begin_submit());
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let notifier = notifier.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::signup(&config, &request).await;
                if let Ok(payload) = &outcome {
                    // The signup payload is unused beyond diagnostics.
                    log::debug!("signup response: {payload}");
                }

                let mut notice = None;
                state.update(|s| notice = Some(s.resolve_submit(outcome)));
                if let Some(notice) = notice {
                    notifier.notify(&notice);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &config, &notifier);
        }
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <input
                class="signup-form__input"
                type="text"
                placeholder="ID (required)"
                prop:value=move || state.get().user_id
                on:input=move |ev| state.update(|s| s.set_user_id(event_target_value(&ev)))
                required
            />
            <input
                class="signup-form__input"
                type="password"
                placeholder="Password (required)"
                prop:value=move || state.get().password
                on:input=move |ev| state.update(|s| s.set_password(event_target_value(&ev)))
                on:focus=move |_| state.update(SignupState::focus_password)
                on:blur=move |_| state.update(SignupState::blur_password)
                required
            />
            <Show when=move || !state.get().message.is_empty()>
                // Advisory slot: styled as informational, not as an error,
                // even though it fills on the all-criteria-met state.
                <div class="signup-form__message">{move || state.get().message}</div>
            </Show>
            <Show when=move || state.get().show_criteria()>
                <ul class="signup-form__criteria">
                    <CriterionRow
                        met=Signal::derive(move || state.get().criteria.has_uppercase)
                        label="uppercase letter"
                    />
                    <CriterionRow
                        met=Signal::derive(move || state.get().criteria.has_number)
                        label="number"
                    />
                    <CriterionRow
                        met=Signal::derive(move || state.get().criteria.has_special_char)
                        label="special character"
                    />
                    <CriterionRow
                        met=Signal::derive(move || state.get().criteria.is_long_enough)
                        label="6 characters or more"
                    />
                </ul>
            </Show>
            <input
                class="signup-form__input"
                type="email"
                placeholder="Email"
                prop:value=move || state.get().email
                on:input=move |ev| state.update(|s| s.set_email(event_target_value(&ev)))
            />
            <button
                class="btn btn--primary signup-form__submit"
                type="submit"
                disabled=move || state.get().submitting
            >
                "Sign Up"
            </button>
        </form>
    }
}

/// One row of the password criteria checklist.
#[component]
fn CriterionRow(met: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <li
            class="signup-form__criterion"
            class=("signup-form__criterion--met", move || met.get())
        >
            {move || if met.get() { "\u{2705} " } else { "\u{274c} " }}
            {label}
        </li>
    }
}
