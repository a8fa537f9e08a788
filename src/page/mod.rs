//! Pagination and search state for the contributors page.
//!
//! All mutable page state lives in [`PageState`]. UI handlers turn events
//! into [`Command`]s and feed them to [`PageState::apply`], which returns the
//! [`Effect`] the caller has to carry out (usually "call me back with this
//! ticket after a delay"). Results are revealed only when the matching
//! ticket comes back; a newer request of the same kind supersedes the older
//! one, so a late timer can never overwrite fresher output.


use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::contributor::{filter_users, Contributor};

const DEFAULT_STATS_REPO: &str = "https://github.com/fineanmol/Hacktoberfest";

/// Whether search results are clipped to the contributors loaded so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Only matches with an id inside the current cutoff are shown.
    #[default]
    Loaded,
    /// Every match is shown regardless of pagination.
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    /// Cutoff used for the first render
    #[serde(default = "default_initial_visible")]
    pub initial_visible: u64,

    /// How far each "load more" advances the cutoff
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Simulated loading delay before results are revealed
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    #[serde(default)]
    pub search_scope: SearchScope,

    /// Repository whose live stats are linked; the year is appended
    #[serde(default = "default_stats_repo")]
    pub stats_repo: String,
}

fn default_initial_visible() -> u64 {
    72
}

fn default_page_size() -> u64 {
    84
}

fn default_reveal_delay_ms() -> u64 {
    500
}

fn default_stats_repo() -> String {
    DEFAULT_STATS_REPO.to_string()
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            initial_visible: default_initial_visible(),
            page_size: default_page_size(),
            reveal_delay_ms: default_reveal_delay_ms(),
            search_scope: SearchScope::default(),
            stats_repo: default_stats_repo(),
        }
    }
}

impl PageSettings {
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Link to this year's repository stats, if the configured base forms
    /// a valid absolute URL.
    #[must_use]
    pub fn stats_url(&self, year: i32) -> Option<Url> {
        Url::parse(&format!("{}{}", self.stats_repo, year)).ok()
    }
}

/// Every contributor whose id falls inside `cutoff`, in input order.
#[must_use]
pub fn render_page(contributors: &[Contributor], cutoff: u64) -> Vec<Contributor> {
    contributors
        .iter()
        .filter(|c| c.id <= cutoff)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    LoadMore,
    Search,
}

/// Identifies one scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    kind: RevealKind,
    serial: u64,
}

impl Ticket {
    #[must_use]
    pub fn kind(&self) -> RevealKind {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadMore,
    Search(String),
    Reveal(Ticket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Dispatch `Command::Reveal(ticket)` once `delay` has elapsed,
    /// cancelling any earlier timer of the same kind.
    Schedule { ticket: Ticket, delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    ticket: Ticket,
    results: Vec<Contributor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    contributors: Vec<Contributor>,
    settings: PageSettings,
    cutoff: u64,
    rendered: Vec<Contributor>,
    loading: bool,
    exhausted: bool,
    searching: bool,
    pending_load: Option<Ticket>,
    pending_search: Option<PendingSearch>,
    next_serial: u64,
}

impl PageState {
    #[must_use]
    pub fn new(contributors: Vec<Contributor>, settings: PageSettings) -> Self {
        let cutoff = settings.initial_visible;
        let rendered = render_page(&contributors, cutoff);
        Self {
            contributors,
            settings,
            cutoff,
            rendered,
            loading: false,
            exhausted: false,
            searching: false,
            pending_load: None,
            pending_search: None,
            next_serial: 0,
        }
    }

    /// Cards currently on screen (hidden behind the placeholder while loading).
    #[must_use]
    pub fn visible(&self) -> &[Contributor] {
        &self.rendered
    }

    #[must_use]
    pub fn cutoff(&self) -> u64 {
        self.cutoff
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        u64::try_from(self.contributors.len()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// All contributors are loaded; the load-more control stays hidden.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// A non-empty search term hides the load-more control.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    #[must_use]
    pub fn shows_load_more(&self) -> bool {
        !self.exhausted && !self.searching
    }

    pub fn apply(&mut self, command: Command) -> Effect {
        match command {
            Command::LoadMore => self.load_more(),
            Command::Search(term) => self.search(&term),
            Command::Reveal(ticket) => {
                self.reveal(ticket);
                Effect::None
            }
        }
    }

    fn load_more(&mut self) -> Effect {
        if self.cutoff >= self.total() {
            return Effect::None;
        }

        self.cutoff = self.cutoff.saturating_add(self.settings.page_size);
        self.loading = true;

        let ticket = self.issue(RevealKind::LoadMore);
        self.pending_load = Some(ticket);
        self.schedule(ticket)
    }

    fn search(&mut self, term: &str) -> Effect {
        let results = filter_users(term, &self.contributors);

        if term.is_empty() {
            self.searching = false;
        } else {
            self.searching = true;
            self.loading = true;
        }

        let ticket = self.issue(RevealKind::Search);
        self.pending_search = Some(PendingSearch { ticket, results });
        self.schedule(ticket)
    }

    fn reveal(&mut self, ticket: Ticket) {
        match ticket.kind {
            RevealKind::LoadMore => {
                if self.pending_load != Some(ticket) {
                    return;
                }
                self.pending_load = None;
                self.rendered = render_page(&self.contributors, self.cutoff);
                if self.cutoff >= self.total() {
                    self.exhausted = true;
                }
            }
            RevealKind::Search => {
                let Some(pending) = self
                    .pending_search
                    .take_if(|pending| pending.ticket == ticket)
                else {
                    return;
                };
                self.rendered = match self.settings.search_scope {
                    SearchScope::Loaded => render_page(&pending.results, self.cutoff),
                    SearchScope::All => pending.results,
                };
            }
        }
        self.loading = false;
    }

    fn issue(&mut self, kind: RevealKind) -> Ticket {
        self.next_serial += 1;
        Ticket {
            kind,
            serial: self.next_serial,
        }
    }

    fn schedule(&self, ticket: Ticket) -> Effect {
        Effect::Schedule {
            ticket,
            delay: self.settings.reveal_delay(),
        }
    }
}
