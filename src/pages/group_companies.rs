//! Read-only list of group companies.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{current_token, load_on_change};
use crate::app::Session;
use crate::components::layout::ScreenLayout;
use crate::net::fetch::ApiClient;
use crate::state::group_companies::{GroupCompaniesState, apply_group_companies};
use crate::state::guard::GuardMode;
use crate::state::listing::ListView;
use crate::util::format::format_timestamp;
use crate::util::route_guard::install_view_guard;

#[component]
pub fn GroupCompaniesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let decision = install_view_guard(session, GuardMode::Protected, use_navigate());

    let companies = RwSignal::new(GroupCompaniesState::default());

    let load = Callback::new(move |()| {
        let Some(token) = current_token(session) else {
            return;
        };
        let Some(ticket) = companies.try_update(GroupCompaniesState::begin_load) else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = api.list_group_companies(Some(&token)).await;
            companies.try_update(|s| apply_group_companies(s, ticket, result));
        });
    });
    load_on_change(session, || (), load);

    view! {
        <ScreenLayout decision=decision title="Group companies">
            {move || match companies.with(|s| s.view()) {
                ListView::Loading => view! { <p class="screen__status">"Loading group companies..."</p> }.into_any(),
                ListView::Error => {
                    view! {
                        <p class="screen__error">{companies.with(|s| s.load_error.clone().unwrap_or_default())}</p>
                    }
                        .into_any()
                }
                ListView::Empty => view! { <p class="screen__status">"No group companies."</p> }.into_any(),
                ListView::Populated => {
                    view! {
                        <ul class="item-list">
                            {companies
                                .get()
                                .items
                                .into_iter()
                                .map(|company| {
                                    let created = format_timestamp(&company.created_at);
                                    view! {
                                        <li class="item-list__row">
                                            <span class="item-list__name">{company.name}</span>
                                            <span class="item-list__meta">"Created " {created}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </ScreenLayout>
    }
}
