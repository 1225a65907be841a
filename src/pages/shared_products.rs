//! Shared catalog with copy-into-project.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the organization's shared products and the active projects that can
//! receive a copy. Both are fetched one after the other under a single load
//! ticket, and failures from either are shown together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{NOT_SIGNED_IN, current_token, load_on_change, reject, settle};
use crate::app::Session;
use crate::components::banner::Banners;
use crate::components::layout::ScreenLayout;
use crate::config::ClientConfig;
use crate::net::fetch::ApiClient;
use crate::state::catalog::{CatalogState, copied_notice, copy_failed_message};
use crate::state::guard::GuardMode;
use crate::state::listing::{ActionKey, ListView};
use crate::util::format::format_price;
use crate::util::route_guard::install_view_guard;

#[component]
pub fn SharedProductsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let fallback_org = expect_context::<ClientConfig>().fallback_organization_id;
    let decision = install_view_guard(session, GuardMode::Protected, use_navigate());

    let catalog = RwSignal::new(CatalogState::default());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(token) = current_token(session) else {
                return;
            };
            let organization_id = session.with_untracked(|s| s.organization_id(fallback_org));
            let Some(ticket) = catalog.try_update(|c| c.products.begin_load()) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let products = api.list_shared_products(Some(&token), organization_id).await;
                let projects = api.list_projects(Some(&token), organization_id).await;
                catalog.try_update(|c| c.apply_load(ticket, products, projects));
            });
        }
    });
    load_on_change(session, || (), load);

    let copy = Callback::new(move |shared_product_id: u64| {
        let destination = match catalog.with_untracked(CatalogState::copy_destination) {
            Ok(destination) => destination,
            Err(message) => return reject(catalog, message),
        };
        let Some(token) = current_token(session) else {
            return reject(catalog, NOT_SIGNED_IN);
        };
        if catalog.try_update(|c| c.products.begin_action(shared_product_id)) != Some(true) {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            let result = api.copy_shared_product(Some(&token), destination, shared_product_id).await;
            let copied = result.is_ok();
            let outcome = result.map(|p| copied_notice(&p)).map_err(|e| copy_failed_message(&e));
            if settle(catalog, ActionKey::Item(shared_product_id), outcome) && copied {
                load.run(());
            }
        });
    });

    view! {
        <ScreenLayout decision=decision title="Shared products">
            <Banners
                error=Signal::derive(move || catalog.with(|c| c.products.error.clone()))
                notice=Signal::derive(move || catalog.with(|c| c.products.notice.clone()))
            />
            <label class="destination">
                "Copy into "
                <select
                    class="destination__select"
                    prop:value=move || catalog.with(|c| c.destination.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        catalog.update(|c| c.select_destination(&raw));
                    }
                >
                    <option value="" disabled=true>
                        "Select a project"
                    </option>
                    {move || {
                        catalog
                            .with(|c| c.projects.clone())
                            .into_iter()
                            .map(|project| {
                                view! { <option value=project.id.to_string()>{project.name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            {move || match catalog.with(|c| c.products.view()) {
                ListView::Loading => view! { <p class="screen__status">"Loading shared products..."</p> }.into_any(),
                ListView::Error => {
                    view! {
                        <p class="screen__error">
                            {catalog.with(|c| c.products.load_error.clone().unwrap_or_default())}
                        </p>
                    }
                        .into_any()
                }
                ListView::Empty => view! { <p class="screen__status">"No shared products."</p> }.into_any(),
                ListView::Populated => {
                    view! {
                        <ul class="item-list">
                            {catalog
                                .with(|c| c.products.items.clone())
                                .into_iter()
                                .map(|product| {
                                    let id = product.id;
                                    let price = format_price(product.price);
                                    view! {
                                        <li class="item-list__row">
                                            <div class="item-list__body">
                                                <span class="item-list__name">{product.name}</span>
                                                <span class="item-list__meta">{product.description}</span>
                                                <span class="item-list__meta">"SKU " {product.sku}</span>
                                            </div>
                                            <span class="item-list__price">{price}</span>
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || catalog.with(|c| c.products.is_in_flight(id))
                                                on:click=move |_| copy.run(id)
                                            >
                                                {move || {
                                                    if catalog.with(|c| c.products.is_in_flight(id)) { "Copying..." } else { "Copy" }
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
