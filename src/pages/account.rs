//! Account page stacking the sign-up and log-in forms.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::signup_form::SignupForm;

/// Account page — titles and the two forms, vertically. No logic of its own.
#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <div class="account-page">
            <div class="account-page__card">
                <h1 class="account-page__title">"Sign Up"</h1>
                <SignupForm/>
                <h1 class="account-page__title">"Log In"</h1>
                <LoginForm/>
            </div>
        </div>
    }
}
