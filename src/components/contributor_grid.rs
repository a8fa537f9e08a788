use leptos::prelude::*;

use super::ContributorCard;
use crate::contributor::Contributor;

/// Card container. While `loading` is set the placeholder replaces the cards.
#[component]
pub fn ContributorGrid(
    #[prop(into)] cards: Signal<Vec<Contributor>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div id="contributors" class="contributors">
            <Show when=move || !loading.get() fallback=|| view! { <LoadingPlaceholder /> }>
                <For
                    each=move || cards.get()
                    key=|contributor| contributor.id
                    children=|contributor| view! { <ContributorCard contributor=contributor /> }
                />
            </Show>
        </div>
    }
}

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="text-center" id="loading">"Loading..."</div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn cards() -> Vec<Contributor> {
        vec![
            Contributor {
                id: 1,
                fullname: "Anmol".to_string(),
                username: "fineanmol".to_string(),
            },
            Contributor {
                id: 2,
                fullname: "Bea".to_string(),
                username: "bea".to_string(),
            },
        ]
    }

    fn render(loading: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <ContributorGrid cards=Signal::stored(cards()) loading=Signal::stored(loading) />
            }
            .to_html()
        })
    }

    #[test]
    fn placeholder_markup() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <LoadingPlaceholder /> }.to_html());

        assert!(html.contains(r#"class="text-center""#));
        assert!(html.contains(r#"id="loading""#));
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn grid_renders_cards_in_order() {
        let html = render(false);

        assert!(html.contains(r#"id="contributors""#));
        assert_eq!(html.matches(r#"class="box-item""#).count(), 2);
        let first = html.find(r#"href="fineanmol""#).unwrap();
        let second = html.find(r#"href="bea""#).unwrap();
        assert!(first < second);
        assert!(!html.contains(r#"id="loading""#));
    }

    #[test]
    fn loading_replaces_cards_with_placeholder() {
        let html = render(true);

        assert!(html.contains(r#"id="loading""#));
        assert!(!html.contains("box-item"));
    }
}
