use leptos::prelude::*;
use url::Url;

use crate::year::{COPYRIGHT_SLOT, FOOTER_SLOT};

#[component]
pub fn StatsBanner(stats_url: Option<Url>) -> impl IntoView {
    view! {
        <p id="stats" class="stats">
            "You guys are awesome, we have again passed the GitHub rate limit this hour. "
            {match stats_url {
                Some(url) => view! {
                    <a href=url.to_string() target="_blank">"Here"</a>
                }.into_any(),
                None => view! { <span>"Here"</span> }.into_any(),
            }}
            " is a link to check out our repo's live stats."
        </p>
    }
}

#[component]
pub fn Footer(year: i32, stats_url: Option<Url>) -> impl IntoView {
    view! {
        <footer class="footer">
            <StatsBanner stats_url=stats_url />
            <p class="footer__event">
                "Hacktoberfest " <span id=FOOTER_SLOT>{year}</span>
            </p>
            <p class="footer__copyright">
                "© " <span id=COPYRIGHT_SLOT>{year}</span> " Hacktoberfest contributors"
            </p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn banner_links_this_years_stats() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let url = Url::parse("https://github.com/fineanmol/Hacktoberfest2026").ok();
            view! { <StatsBanner stats_url=url /> }.to_html()
        });

        assert!(html.contains(r#"id="stats""#));
        assert!(html.contains(r#"href="https://github.com/fineanmol/Hacktoberfest2026""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("passed the GitHub rate limit"));
    }

    #[test]
    fn banner_without_url_has_no_link() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <StatsBanner stats_url=None /> }.to_html());

        assert!(!html.contains("<a"));
        assert!(html.contains("live stats"));
    }

    #[test]
    fn footer_fills_year_slots() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer year=2026 stats_url=None /> }.to_html());

        assert!(html.contains(&format!(r#"id="{FOOTER_SLOT}""#)));
        assert!(html.contains(&format!(r#"id="{COPYRIGHT_SLOT}""#)));
        assert!(html.contains("2026"));
    }
}
