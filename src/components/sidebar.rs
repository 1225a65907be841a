//! Navigation sidebar framing every signed-in screen.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::Session;
use crate::state::session::SessionStore;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Todos"),
    ("/projects", "Projects"),
    ("/shared-copyable", "Shared products"),
    ("/shared-read-only", "Group companies"),
];

/// CSS class for a nav link; the link for the current path is marked active.
fn link_class(pathname: &str, href: &str) -> &'static str {
    if pathname == href {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    }
}

/// Sidebar with navigation, the signed-in username, and logout.
///
/// Logout only clears the session; the view guard on the current screen sees
/// the transition and performs the redirect.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;

    let username = move || {
        session.with(|s| s.identity().map(|i| i.username.clone()).unwrap_or_default())
    };

    let on_logout = move |_| session.update(SessionStore::logout);

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Catalog Admin"</div>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a class=move || pathname.with(|p| link_class(p, href)) href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{username}</span>
                <button class="btn sidebar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
