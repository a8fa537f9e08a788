use leptos::prelude::*;

use super::ThemeToggle;
use crate::year::TITLE_SLOT;

#[component]
pub fn Header(year: i32) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">
                "Hacktoberfest "
                <span id=TITLE_SLOT>{year}</span>
                " Contributors"
            </h1>
            <ThemeToggle />
        </header>
    }
}
