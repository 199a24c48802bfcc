//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::ApiConfig;
use crate::pages::account::AccountPage;
use crate::util::notify::{AlertNotifier, Notifier};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and the notification sink used by both
/// form components. The base URL is injected here rather than read from the
/// ambient environment at call time; an empty base means same-origin.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::default());
    provide_context::<Arc<dyn Notifier>>(Arc::new(AlertNotifier));

    view! {
        <Stylesheet id="leptos" href="/pkg/account-ui.css"/>
        <Title text="Account"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AccountPage/>
            </Routes>
        </Router>
    }
}
