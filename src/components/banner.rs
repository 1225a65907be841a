//! Error and success banners above a screen's content.

use leptos::prelude::*;

#[component]
pub fn Banners(error: Signal<Option<String>>, notice: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="banner banner--error" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
        <Show when=move || notice.with(Option::is_some)>
            <p class="banner banner--notice" role="status">
                {move || notice.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
