//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::fetch::api_client;
use crate::pages::{
    group_companies::GroupCompaniesPage, login::LoginPage, project_detail::ProjectDetailPage, projects::ProjectsPage,
    register::RegisterPage, shared_products::SharedProductsPage, todos::TodosPage,
};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// Session store as provided through context.
pub type Session = RwSignal<SessionStore<BrowserStorage>>;

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
/// Provides the configuration, API client, and session store, then resolves
/// the persisted session once the app is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session: Session = RwSignal::new(SessionStore::new(BrowserStorage));

    provide_context(api_client(&config));
    provide_context(config);
    provide_context(session);

    // Effects only run client-side, so SSR always renders the unresolved
    // placeholder and the stored token is read after hydration.
    Effect::new(move || {
        session.update(|s| {
            s.initialize();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-admin.css"/>
        <Title text="Catalog Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=TodosPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=(StaticSegment("projects"), ParamSegment("project_id")) view=ProjectDetailPage/>
                <Route path=StaticSegment("shared-read-only") view=GroupCompaniesPage/>
                <Route path=StaticSegment("shared-copyable") view=SharedProductsPage/>
            </Routes>
        </Router>
    }
}
