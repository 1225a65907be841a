//! Todo list: the default signed-in screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after login. A 401 from the list endpoint means the stored
//! token is no longer accepted, so the screen signs the user out and the view
//! guard sends them to `/login`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{NOT_SIGNED_IN, current_token, load_on_change, reject, settle};
use crate::app::Session;
use crate::components::banner::Banners;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::ScreenLayout;
use crate::net::fetch::ApiClient;
use crate::net::types::Todo;
use crate::state::guard::GuardMode;
use crate::state::listing::{ActionKey, ListView};
use crate::state::todos::{
    DELETED_NOTICE, TodosState, apply_todos, create_failed_message, created_notice,
    delete_failed_message, enforce_outcome, validate_content,
};
use crate::util::format::format_timestamp;
use crate::util::route_guard::install_view_guard;

#[component]
pub fn TodosPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let decision = install_view_guard(session, GuardMode::Protected, use_navigate());

    let todos = RwSignal::new(TodosState::default());
    let draft = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Todo>);

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(token) = current_token(session) else {
                return;
            };
            let Some(ticket) = todos.try_update(TodosState::begin_load) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.list_todos(Some(&token)).await;
                if let Some(outcome) = todos.try_update(|s| apply_todos(s, ticket, result)) {
                    session.maybe_update(|s| enforce_outcome(s, outcome));
                }
            });
        }
    });
    load_on_change(session, || (), load);

    let add = Callback::new({
        let api = api.clone();
        move |()| {
            let content = match validate_content(&draft.get_untracked()) {
                Ok(content) => content,
                Err(message) => return reject(todos, message),
            };
            let Some(token) = current_token(session) else {
                return reject(todos, NOT_SIGNED_IN);
            };
            if todos.try_update(|s| s.begin_action(ActionKey::Create)) != Some(true) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let result = api.create_todo(Some(&token), &content).await;
                let created = result.is_ok();
                let outcome = result.map(|t| created_notice(&t)).map_err(|e| create_failed_message(&e));
                if settle(todos, ActionKey::Create, outcome) && created {
                    draft.try_update(String::clear);
                    load.run(());
                }
            });
        }
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(todo) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let Some(token) = current_token(session) else {
            return reject(todos, NOT_SIGNED_IN);
        };
        if todos.try_update(|s| s.begin_action(todo.id)) != Some(true) {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            let result = api.delete_todo(Some(&token), todo.id).await;
            let deleted = result.is_ok();
            let outcome = result.map(|()| DELETED_NOTICE.to_owned()).map_err(|e| delete_failed_message(&e));
            if settle(todos, ActionKey::Item(todo.id), outcome) && deleted {
                load.run(());
            }
        });
    });
    let cancel_delete = Callback::new(move |()| pending_delete.set(None));

    view! {
        <ScreenLayout decision=decision title="Todos">
            <Banners
                error=Signal::derive(move || todos.with(|s| s.error.clone()))
                notice=Signal::derive(move || todos.with(|s| s.notice.clone()))
            />
            <form
                class="inline-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    add.run(());
                }
            >
                <input
                    class="inline-form__input"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || todos.with(|s| s.is_in_flight(ActionKey::Create))
                >
                    "Add"
                </button>
            </form>
            {move || match todos.with(|s| s.view()) {
                ListView::Loading => view! { <p class="screen__status">"Loading todos..."</p> }.into_any(),
                ListView::Error => {
                    view! {
                        <p class="screen__error">{todos.with(|s| s.load_error.clone().unwrap_or_default())}</p>
                    }
                        .into_any()
                }
                ListView::Empty => view! { <p class="screen__status">"Nothing to do yet."</p> }.into_any(),
                ListView::Populated => {
                    view! {
                        <ul class="item-list">
                            {todos
                                .get()
                                .items
                                .into_iter()
                                .map(|todo| {
                                    let id = todo.id;
                                    let created = format_timestamp(&todo.created_at);
                                    let content = todo.content.clone();
                                    let row_class = if todo.completed {
                                        "item-list__row item-list__row--done"
                                    } else {
                                        "item-list__row"
                                    };
                                    view! {
                                        <li class=row_class>
                                            <span class="item-list__name">{content}</span>
                                            <span class="item-list__meta">{created}</span>
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || todos.with(|s| s.is_in_flight(id))
                                                on:click=move |_| pending_delete.set(Some(todo.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Todo"
                    message=Signal::derive(move || {
                        pending_delete
                            .with(|t| t.as_ref().map(|t| format!("Delete \"{}\"? This cannot be undone.", t.content)))
                            .unwrap_or_default()
                    })
                    confirm_label="Delete"
                    on_cancel=cancel_delete
                    on_confirm=confirm_delete
                />
            </Show>
        </ScreenLayout>
    }
}
