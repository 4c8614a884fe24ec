//! State of one mounted recipe finder: search box, result cards, error
//! container and detail panel.

use log::{debug, error, info};
use std::sync::Arc;

use crate::client::MealSource;
use crate::error::{ErrorKind, FinderError};
use crate::model::{MealDetail, MealSummary, SearchQuery};
use crate::render::{render_cards, render_detail};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load recipe details. Please try again later.";

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

/// Input on a rendered result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    Click { id: String },
    KeyDown { id: String, key: Key },
}

impl CardEvent {
    /// Id of the card to open, if this event activates it
    pub fn activation(&self) -> Option<&str> {
        match self {
            CardEvent::Click { id } => Some(id.as_str()),
            CardEvent::KeyDown {
                id,
                key: Key::Enter | Key::Space,
            } => Some(id.as_str()),
            CardEvent::KeyDown { .. } => None,
        }
    }
}

/// Scroll the widget has asked the page to perform, always smooth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    DetailIntoView,
    PageTop,
}

/// Message shown in the error container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DetailPanel {
    content: String,
    meal: Option<MealDetail>,
    hidden: bool,
    aria_hidden: bool,
}

impl Default for DetailPanel {
    fn default() -> Self {
        DetailPanel {
            content: String::new(),
            meal: None,
            hidden: true,
            aria_hidden: true,
        }
    }
}

impl DetailPanel {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn meal(&self) -> Option<&MealDetail> {
        self.meal.as_ref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_aria_hidden(&self) -> bool {
        self.aria_hidden
    }
}

/// Handle for one in-flight detail lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    id: String,
}

impl LookupTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// What became of a finished lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupApplied {
    Rendered,
    Failed,
    /// A newer lookup was issued (or the panel closed) meanwhile
    Stale,
}

pub struct RecipeWidget {
    source: Arc<dyn MealSource>,
    search_input: String,
    heading: String,
    cards: Vec<MealSummary>,
    cards_html: String,
    notice: Option<Notice>,
    detail: DetailPanel,
    scroll: Option<Scroll>,
    lookup_seq: u64,
}

impl RecipeWidget {
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        RecipeWidget {
            source,
            search_input: String::new(),
            heading: String::new(),
            cards: Vec::new(),
            cards_html: String::new(),
            notice: None,
            detail: DetailPanel::default(),
            scroll: None,
            lookup_seq: 0,
        }
    }

    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn cards(&self) -> &[MealSummary] {
        &self.cards
    }

    pub fn cards_html(&self) -> &str {
        &self.cards_html
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    /// Most recent scroll request
    pub fn scroll(&self) -> Option<Scroll> {
        self.scroll
    }

    fn show_notice(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
    }

    fn clear_results(&mut self) {
        self.heading.clear();
        self.cards.clear();
        self.cards_html.clear();
        self.notice = None;
    }

    /// Keydown in the search box; Enter runs the search
    pub async fn search_key(&mut self, key: Key) -> bool {
        if key != Key::Enter {
            return false;
        }
        self.search().await
    }

    /// Type `term` into the search box and run the search
    pub async fn search_for(&mut self, term: &str) -> bool {
        self.set_search_input(term);
        self.search().await
    }

    /// Run a search for the current input. Previous results and messages are
    /// replaced. Returns true when cards were rendered.
    pub async fn search(&mut self) -> bool {
        self.clear_results();

        let query = match SearchQuery::parse(&self.search_input) {
            Ok(query) => query,
            Err(_) => {
                self.show_notice(ErrorKind::LocalValidation, EMPTY_QUERY_MESSAGE);
                return false;
            }
        };

        self.heading = format!("Searching for \"{}\"...", query);
        let source = Arc::clone(&self.source);
        let result = source.search(&query).await;

        match result {
            Ok(meals) => {
                info!("{} results for {:?}", meals.len(), query.as_str());
                self.heading = format!("Search results for \"{}\":", query);
                self.cards_html = render_cards(&meals);
                self.cards = meals;
                self.search_input.clear();
                true
            }
            Err(FinderError::NotFound) => {
                self.heading.clear();
                self.show_notice(
                    ErrorKind::EmptyResult,
                    format!(
                        "No recipes found for \"{}\". Try another search term!",
                        query
                    ),
                );
                false
            }
            Err(e) => {
                error!("Search for {:?} failed: {}", query.as_str(), e);
                self.heading.clear();
                self.show_notice(e.kind(), SEARCH_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Click or keydown on a card. Only activating events on cards that are
    /// currently rendered start a lookup.
    pub async fn handle_card_event(&mut self, event: CardEvent) -> Option<LookupApplied> {
        let id = event.activation()?;
        if !self.cards.iter().any(|meal| meal.id == id) {
            debug!("Ignoring event for unknown card {:?}", id);
            return None;
        }
        let id = id.to_string();
        Some(self.select(&id).await)
    }

    /// Fetch one meal and show it in the detail panel
    pub async fn select(&mut self, id: &str) -> LookupApplied {
        let ticket = self.begin_lookup(id);
        let source = Arc::clone(&self.source);
        let result = source.lookup(ticket.id()).await;
        self.complete_lookup(ticket, result)
    }

    /// Issue a new lookup; any earlier ticket becomes stale
    pub fn begin_lookup(&mut self, id: &str) -> LookupTicket {
        self.lookup_seq += 1;
        LookupTicket {
            seq: self.lookup_seq,
            id: id.to_string(),
        }
    }

    /// Apply a finished lookup if its ticket is still the latest
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        result: Result<MealDetail, FinderError>,
    ) -> LookupApplied {
        if ticket.seq != self.lookup_seq {
            debug!(
                "Dropping stale lookup for {:?} (seq {}, latest {})",
                ticket.id, ticket.seq, self.lookup_seq
            );
            return LookupApplied::Stale;
        }

        match result {
            Ok(meal) => {
                self.notice = None;
                self.detail.content = render_detail(&meal);
                self.detail.meal = Some(meal);
                self.detail.hidden = false;
                self.detail.aria_hidden = false;
                self.scroll = Some(Scroll::DetailIntoView);
                LookupApplied::Rendered
            }
            Err(e) => {
                error!("Lookup for {:?} failed: {}", ticket.id, e);
                self.show_notice(e.kind(), DETAIL_FAILED_MESSAGE);
                LookupApplied::Failed
            }
        }
    }

    /// Back button: clear and hide the panel, scroll to the top of the page
    pub fn close_detail(&mut self) {
        // in-flight lookups must not reopen the panel
        self.lookup_seq += 1;
        self.detail = DetailPanel::default();
        self.scroll = Some(Scroll::PageTop);
    }
}
