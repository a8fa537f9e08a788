use leptos::prelude::*;

use crate::app::ThemeContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let toggle = move |_| theme.set_flags.update(|flags| flags.toggle());

    let label = move || {
        if theme.flags.get().light {
            "Switch to dark mode"
        } else {
            "Switch to light mode"
        }
    };

    view! {
        <button
            class=move || theme.flags.get().toggle_class()
            on:click=toggle
            aria-label=label
            title=label
        >
            <div class=move || theme.flags.get().icon_class()></div>
        </button>
    }
}
