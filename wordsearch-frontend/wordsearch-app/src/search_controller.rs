use wordsearch_api_types::search::SearchResults;

use crate::{
    api::{parse_results, search_url, RawResponse, SearchTransport},
    config::WidgetConfig,
    error::{AppError, AppResult},
    request_tracker::{RequestId, RequestTracker},
    search_result::render_results,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching(String),
    Failed(String),
}

impl SearchStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            SearchStatus::Idle => None,
            SearchStatus::Searching(query) => Some(format!("Searching for \"{query}\"...")),
            SearchStatus::Failed(reason) => Some(format!("Search failed: {reason}")),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SearchStatus::Failed(_))
    }
}

/// The parts of the page the controller is allowed to change.
pub trait WidgetView {
    fn clear_input(&self);
    /// Replaces the whole content of the results container.
    fn show_results(&self, html: String);
    fn show_status(&self, status: SearchStatus);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSearch {
    pub id: RequestId,
    pub query: String,
    pub url: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not an Enter press, or Enter while an IME composition is open. The event must be left alone.
    Ignored,
    /// Enter on an empty input. Nothing was sent.
    Skipped,
    Submitted(PendingSearch),
}

impl KeyOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

pub struct SearchController<T, V> {
    config: WidgetConfig,
    transport: T,
    view: V,
    tracker: RequestTracker,
}

impl<T, V> SearchController<T, V>
where
    T: SearchTransport,
    V: WidgetView,
{
    pub fn new(config: WidgetConfig, transport: T, view: V) -> Self {
        Self {
            config,
            transport,
            view,
            tracker: RequestTracker::default(),
        }
    }

    /// `is_composing` is set while an IME composition is open. The Enter that
    /// commits the composition must not submit the query.
    pub fn on_key_down(&self, key: &str, is_composing: bool, value: &str) -> KeyOutcome {
        if key != "Enter" || is_composing {
            return KeyOutcome::Ignored;
        }
        let outcome = match self.search(value) {
            Ok(pending) => KeyOutcome::Submitted(pending),
            Err(e) => {
                log::debug!("not searching: {e}");
                KeyOutcome::Skipped
            }
        };
        self.view.clear_input();
        outcome
    }

    /// Issues a new request id for `query`. Whitespace only queries are refused.
    pub fn search(&self, query: &str) -> AppResult<PendingSearch> {
        if query.trim().is_empty() {
            return Err(AppError::EmptyString);
        }
        let id = self.tracker.issue();
        let url = search_url(&self.config.api_base, query);
        log::debug!("search {id:?} for {query:?} -> {url}");
        self.view
            .show_status(SearchStatus::Searching(query.to_string()));
        Ok(PendingSearch {
            id,
            query: query.to_string(),
            url,
        })
    }

    pub async fn send(&self, pending: PendingSearch) {
        match self.transport.get(&pending.url).await {
            Ok(response) => self.on_response(pending.id, response),
            Err(e) => self.on_failure(pending.id, e),
        }
    }

    pub fn on_response(&self, id: RequestId, response: RawResponse) {
        if !self.tracker.is_current(id) {
            log::debug!("dropping stale response for {id:?}");
            return;
        }
        if !response.is_ok() {
            self.fail(AppError::BadStatus(response.status));
            return;
        }
        match parse_results(&response.body) {
            Ok(results) => {
                if let SearchResults::Multiple { rest, .. } = &results {
                    log::debug!("{id:?} showing first of {} results", rest.len() + 1);
                }
                self.view.show_results(render_results(&results));
                self.view.show_status(SearchStatus::Idle);
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn on_failure(&self, id: RequestId, error: AppError) {
        if !self.tracker.is_current(id) {
            log::debug!("dropping stale failure for {id:?}: {error}");
            return;
        }
        self.fail(error);
    }

    fn fail(&self, error: AppError) {
        log::error!("search failed: {error}");
        self.view.show_status(SearchStatus::Failed(error.to_string()));
    }
}
