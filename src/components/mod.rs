mod back_to_top;
mod contributor_card;
mod contributor_grid;
mod footer;
mod header;
mod load_more;
mod search_box;
mod theme_toggle;

pub use back_to_top::BackToTopButton;
pub use contributor_card::ContributorCard;
pub use contributor_grid::{ContributorGrid, LoadingPlaceholder};
pub use footer::{Footer, StatsBanner};
pub use header::Header;
pub use load_more::LoadMoreButton;
pub use search_box::SearchBox;
pub use theme_toggle::ThemeToggle;
