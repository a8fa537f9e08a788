use leptos::prelude::*;

/// `searching` adds the `hidden` class; `exhausted` sets the `hidden`
/// attribute for good.
#[component]
pub fn LoadMoreButton(
    #[prop(into)] exhausted: Signal<bool>,
    #[prop(into)] searching: Signal<bool>,
    #[prop(into)] on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            id="loadMore"
            class=move || if searching.get() { "load-more hidden" } else { "load-more" }
            hidden=move || exhausted.get()
            on:click=move |_| on_load_more.run(())
        >
            "Load More"
        </button>
    }
}
