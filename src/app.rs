use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::bootstrap::{Bootstrap, BOOTSTRAP_ELEMENT_ID};
use crate::components::{
    BackToTopButton, ContributorGrid, Footer, Header, LoadMoreButton, SearchBox,
};
use crate::page::{Command, Effect as PageEffect, PageState, RevealKind};
use crate::theme::ThemeFlags;
use crate::year::{current_year, page_title, set_current_year};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let payload = use_context::<Bootstrap>().and_then(|bootstrap| {
        bootstrap
            .to_script_json()
            .inspect_err(|err| leptos::logging::error!("failed to embed contributors: {err}"))
            .ok()
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
                {payload.map(|json| view! {
                    <script id=BOOTSTRAP_ELEMENT_ID type="application/json" inner_html=json></script>
                })}
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub flags: ReadSignal<ThemeFlags>,
    pub set_flags: WriteSignal<ThemeFlags>,
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (flags, set_flags) = signal(ThemeFlags::default());
    provide_context(ThemeContext { flags, set_flags });

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/contributors.css"/>

        <Title text=page_title(current_year())/>

        <Router>
            <div class=move || flags.get().page_class()>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ContributorsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Pending reveal timers, one slot per kind of delayed render.
#[derive(Clone, Copy)]
struct RevealTimers {
    load_more: StoredValue<Option<TimeoutHandle>>,
    search: StoredValue<Option<TimeoutHandle>>,
}

impl RevealTimers {
    fn new() -> Self {
        Self {
            load_more: StoredValue::new(None),
            search: StoredValue::new(None),
        }
    }

    fn slot(self, kind: RevealKind) -> StoredValue<Option<TimeoutHandle>> {
        match kind {
            RevealKind::LoadMore => self.load_more,
            RevealKind::Search => self.search,
        }
    }
}

/// Apply a command to the page state and carry out the resulting effect.
fn dispatch(set_page: WriteSignal<PageState>, timers: RevealTimers, command: Command) {
    let Some(PageEffect::Schedule { ticket, delay }) =
        set_page.try_update(|page| page.apply(command))
    else {
        return;
    };

    let slot = timers.slot(ticket.kind());
    slot.update_value(|pending| {
        if let Some(pending) = pending.take() {
            pending.clear();
        }
    });

    match set_timeout_with_handle(
        move || dispatch(set_page, timers, Command::Reveal(ticket)),
        delay,
    ) {
        Ok(handle) => slot.set_value(Some(handle)),
        Err(err) => leptos::logging::error!("failed to schedule reveal: {err:?}"),
    }
}

#[component]
fn ContributorsPage() -> impl IntoView {
    let Bootstrap {
        contributors,
        settings,
    } = use_context::<Bootstrap>().unwrap_or_default();

    let year = current_year();
    let stats_url = settings.stats_url(year);

    let (page, set_page) = signal(PageState::new(contributors, settings));
    let timers = RevealTimers::new();

    Effect::new(move |_| {
        set_current_year(&document(), year);
    });

    let cards = Signal::derive(move || page.with(|p| p.visible().to_vec()));
    let loading = Signal::derive(move || page.with(PageState::is_loading));
    let exhausted = Signal::derive(move || page.with(PageState::is_exhausted));
    let searching = Signal::derive(move || page.with(PageState::is_searching));

    view! {
        <div class="container">
            <Header year=year />
            <SearchBox on_search=move |term: String| {
                dispatch(set_page, timers, Command::Search(term));
            } />
            <ContributorGrid cards=cards loading=loading />
            <LoadMoreButton
                exhausted=exhausted
                searching=searching
                on_load_more=move |()| dispatch(set_page, timers, Command::LoadMore)
            />
            <BackToTopButton />
            <Footer year=year stats_url=stats_url />
        </div>
    }
}
