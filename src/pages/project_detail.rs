//! Products of a single project, with promotion to the shared catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the project list via `/projects/:project_id`. Promotion
//! creates a new shared product; the project product stays as it was, so the
//! list is simply re-fetched afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{NOT_SIGNED_IN, current_token, load_on_change, reject, settle};
use crate::app::Session;
use crate::components::banner::Banners;
use crate::components::layout::ScreenLayout;
use crate::net::fetch::ApiClient;
use crate::net::types::ProjectProduct;
use crate::state::guard::GuardMode;
use crate::state::listing::{ActionKey, ListView};
use crate::state::project_products::{
    ProjectProductsState, apply_project_products, lineage_label, parse_project_id, promote_failed_message,
    promoted_notice,
};
use crate::util::format::format_price;
use crate::util::route_guard::install_view_guard;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let decision = install_view_guard(session, GuardMode::Protected, use_navigate());

    let products = RwSignal::new(ProjectProductsState::default());
    let project_id = move || parse_project_id(params.read().get("project_id").as_deref());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(token) = current_token(session) else {
                return;
            };
            let Some(ticket) = products.try_update(ProjectProductsState::begin_load) else {
                return;
            };
            let id = match params.with_untracked(|p| parse_project_id(p.get("project_id").as_deref())) {
                Ok(id) => id,
                Err(message) => {
                    products.update(|s| {
                        s.finish_load(ticket, Err(message.to_owned()));
                    });
                    return;
                }
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.list_project_products(Some(&token), id).await;
                products.try_update(|s| apply_project_products(s, ticket, result));
            });
        }
    });
    load_on_change(session, project_id, load);

    let promote = Callback::new(move |product: ProjectProduct| {
        let Some(token) = current_token(session) else {
            return reject(products, NOT_SIGNED_IN);
        };
        if products.try_update(|s| s.begin_action(product.id)) != Some(true) {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            let result = api.promote_project_product(Some(&token), product.id).await;
            let promoted = result.is_ok();
            let outcome = result
                .map(|shared| promoted_notice(&product, &shared))
                .map_err(|e| promote_failed_message(&e));
            if settle(products, ActionKey::Item(product.id), outcome) && promoted {
                load.run(());
            }
        });
    });

    let heading = move || match project_id() {
        Ok(id) => format!("Project #{id}"),
        Err(_) => "Project".to_owned(),
    };

    view! {
        <ScreenLayout decision=decision title="Project products">
            <p class="screen__subtitle">
                <a href="/projects">"All projects"</a>
                " / "
                {heading}
            </p>
            <Banners
                error=Signal::derive(move || products.with(|s| s.error.clone()))
                notice=Signal::derive(move || products.with(|s| s.notice.clone()))
            />
            {move || match products.with(|s| s.view()) {
                ListView::Loading => view! { <p class="screen__status">"Loading products..."</p> }.into_any(),
                ListView::Error => {
                    view! {
                        <p class="screen__error">{products.with(|s| s.load_error.clone().unwrap_or_default())}</p>
                    }
                        .into_any()
                }
                ListView::Empty => view! { <p class="screen__status">"This project has no products."</p> }.into_any(),
                ListView::Populated => {
                    view! {
                        <ul class="item-list">
                            {products
                                .get()
                                .items
                                .into_iter()
                                .map(|product| {
                                    let id = product.id;
                                    let lineage = lineage_label(&product);
                                    let price = format_price(product.price);
                                    let name = product.name.clone();
                                    let description = product.description.clone();
                                    view! {
                                        <li class="item-list__row">
                                            <div class="item-list__body">
                                                <span class="item-list__name">{name}</span>
                                                <span class="item-list__meta">{description}</span>
                                                <span class="item-list__meta">{lineage}</span>
                                            </div>
                                            <span class="item-list__price">{price}</span>
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || products.with(|s| s.is_in_flight(id))
                                                on:click=move |_| promote.run(product.clone())
                                            >
                                                {move || {
                                                    if products.with(|s| s.is_in_flight(id)) {
                                                        "Promoting..."
                                                    } else {
                                                        "Promote to shared"
                                                    }
                                                }}
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
        </ScreenLayout>
    }
}
