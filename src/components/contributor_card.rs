use leptos::prelude::*;

use crate::contributor::Contributor;

#[component]
pub fn ContributorCard(contributor: Contributor) -> impl IntoView {
    let avatar = contributor.avatar_url();
    let id = contributor.id.to_string();

    view! {
        <a class="box-item" href=contributor.username id=id>
            <span>{contributor.fullname}</span>
            <img loading="lazy" src=avatar />
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn card_links_username_and_lazy_avatar() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let contributor = Contributor {
                id: 7,
                fullname: "Anmol".to_string(),
                username: "fineanmol".to_string(),
            };
            view! { <ContributorCard contributor=contributor /> }.to_html()
        });

        assert!(html.contains(r#"class="box-item""#));
        assert!(html.contains(r#"href="fineanmol""#));
        assert!(html.contains(r#"id="7""#));
        assert!(html.contains("<span>Anmol</span>"));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"src="https://github.com/fineanmol.png""#));
    }
}
