//! Login form: ID and password.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ApiConfig;
use crate::state::login::LoginState;
use crate::util::notify::Notifier;

/// Log-in form.
///
/// Both inputs carry the native `required` attribute; there is no local
/// validation beyond that. The submit button is disabled while a request is
/// in flight.
#[component]
pub fn LoginForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let notifier = expect_context::<Arc<dyn Notifier>>();

    let state = RwSignal::new(LoginState::default());

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
                let outcome = crate::net::api::login(&config, &request).await;

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
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-form__input"
                type="text"
                placeholder="ID"
                prop:value=move || state.get().user_id
                on:input=move |ev| state.update(|s| s.set_user_id(event_target_value(&ev)))
                required
            />
            <input
                class="login-form__input"
                type="password"
                placeholder="Password"
                prop:value=move || state.get().password
                on:input=move |ev| state.update(|s| s.set_password(event_target_value(&ev)))
                required
            />
            <button
                class="btn btn--primary login-form__submit"
                type="submit"
                disabled=move || state.get().submitting
            >
                "Log In"
            </button>
        </form>
    }
}
