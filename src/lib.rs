pub mod app;
pub mod bootstrap;
pub mod components;
pub mod contributor;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod year;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod data;

#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "ssr")]
pub mod forwarded;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::bootstrap::Bootstrap;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let bootstrap = Bootstrap::from_document(&document()).unwrap_or_else(|err| {
        leptos::logging::error!("no contributor data: {err}");
        Bootstrap::default()
    });

    leptos::mount::hydrate_body(move || {
        provide_context(bootstrap);
        view! { <App/> }
    });
}
