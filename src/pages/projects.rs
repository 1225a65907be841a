//! Project list with a create form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{NOT_SIGNED_IN, current_token, load_on_change, reject, settle};
use crate::app::Session;
use crate::components::banner::Banners;
use crate::components::layout::ScreenLayout;
use crate::config::ClientConfig;
use crate::net::fetch::ApiClient;
use crate::state::guard::GuardMode;
use crate::state::listing::{ActionKey, ListView};
use crate::state::projects::{ProjectsState, apply_projects, create_failed_message, created_notice, validate_name};
use crate::util::format::format_timestamp;
use crate::util::route_guard::install_view_guard;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let fallback_org = expect_context::<ClientConfig>().fallback_organization_id;
    let decision = install_view_guard(session, GuardMode::Protected, use_navigate());

    let projects = RwSignal::new(ProjectsState::default());
    let new_name = RwSignal::new(String::new());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(token) = current_token(session) else {
                return;
            };
            let organization_id = session.with_untracked(|s| s.organization_id(fallback_org));
            let Some(ticket) = projects.try_update(ProjectsState::begin_load) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.list_projects(Some(&token), organization_id).await;
                projects.try_update(|s| apply_projects(s, ticket, result));
            });
        }
    });
    load_on_change(session, || (), load);

    let create = Callback::new(move |()| {
        let name = match validate_name(&new_name.get_untracked()) {
            Ok(name) => name,
            Err(message) => return reject(projects, message),
        };
        let Some(token) = current_token(session) else {
            return reject(projects, NOT_SIGNED_IN);
        };
        if projects.try_update(|s| s.begin_action(ActionKey::Create)) != Some(true) {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            let result = api.create_project(Some(&token), &name).await;
            let created = result.is_ok();
            let outcome = result.map(|p| created_notice(&p)).map_err(|e| create_failed_message(&e));
            if settle(projects, ActionKey::Create, outcome) && created {
                new_name.try_update(String::clear);
                load.run(());
            }
        });
    });

    view! {
        <ScreenLayout decision=decision title="Projects">
            <Banners
                error=Signal::derive(move || projects.with(|s| s.error.clone()))
                notice=Signal::derive(move || projects.with(|s| s.notice.clone()))
            />
            <form
                class="inline-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    create.run(());
                }
            >
                <input
                    class="inline-form__input"
                    type="text"
                    placeholder="New project name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || projects.with(|s| s.is_in_flight(ActionKey::Create))
                >
                    {move || if projects.with(|s| s.is_in_flight(ActionKey::Create)) { "Creating..." } else { "Create" }}
                </button>
            </form>
            {move || match projects.with(|s| s.view()) {
                ListView::Loading => view! { <p class="screen__status">"Loading projects..."</p> }.into_any(),
                ListView::Error => {
                    view! {
                        <p class="screen__error">{projects.with(|s| s.load_error.clone().unwrap_or_default())}</p>
                    }
                        .into_any()
                }
                ListView::Empty => view! { <p class="screen__status">"No projects yet."</p> }.into_any(),
                ListView::Populated => {
                    view! {
                        <ul class="item-list">
                            {projects
                                .get()
                                .items
                                .into_iter()
                                .map(|project| {
                                    let href = format!("/projects/{}", project.id);
                                    let created = format_timestamp(&project.created_at);
                                    view! {
                                        <li class="item-list__row">
                                            <a class="item-list__name" href=href>
                                                {project.name}
                                            </a>
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
