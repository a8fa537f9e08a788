use leptos::prelude::*;

#[component]
pub fn SearchBox(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    view! {
        <div class="search">
            <input
                type="text"
                id="search"
                placeholder="Search contributors"
                autocomplete="off"
                on:keyup=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
