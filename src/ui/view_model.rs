use crate::data::RentalRepository;
use crate::network::FetchErrorKind;
use crate::ui::state::RentalUiState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

/// How results of overlapping refreshes are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshOrdering {
    /// Every fetch publishes its result when it completes, so a slow earlier
    /// fetch can overwrite the result of a newer one.
    #[default]
    CompletionOrder,
    /// Only the most recently issued fetch may publish its result.
    LatestIssued,
}

/// Owns the properties screen state and keeps it in sync with the repository.
///
/// State changes are published through a `watch` channel; every transition
/// notifies subscribers, including a `Loading` that replaces `Loading`.
/// Fetches run on the tokio runtime and are aborted when the view model is
/// dropped.
pub struct RentalViewModel {
    repository: Arc<dyn RentalRepository>,
    state: Arc<watch::Sender<RentalUiState>>,
    ordering: RefreshOrdering,
    issued: Arc<AtomicU64>,
    tasks: Mutex<JoinSet<()>>,
}

impl RentalViewModel {
    /// Create the view model and start the first fetch.
    ///
    /// Panics when called outside a tokio runtime.
    pub fn new(repository: Arc<dyn RentalRepository>) -> Self {
        Self::with_ordering(repository, RefreshOrdering::default())
    }

    pub fn with_ordering(repository: Arc<dyn RentalRepository>, ordering: RefreshOrdering) -> Self {
        let (state, _) = watch::channel(RentalUiState::Loading);
        let view_model = Self {
            repository,
            state: Arc::new(state),
            ordering,
            issued: Arc::new(AtomicU64::new(0)),
            tasks: Mutex::new(JoinSet::new()),
        };
        view_model.refresh();
        view_model
    }

    /// Publish `Loading` and start one fetch.
    ///
    /// Overlapping calls are not coalesced. With
    /// [`RefreshOrdering::CompletionOrder`] the last fetch to finish wins,
    /// which is not necessarily the last one started.
    pub fn refresh(&self) {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(RentalUiState::Loading);
        debug!(ticket, "Fetching rental properties");

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let issued = Arc::clone(&self.issued);
        let ordering = self.ordering;

        let mut tasks = self.tasks.lock();
        while tasks.try_join_next().is_some() {}
        tasks.spawn(async move {
            let next = match repository.get_rental_properties().await {
                Ok(properties) => {
                    debug!(ticket, count = properties.len(), "Fetched rental properties");
                    RentalUiState::Success(properties)
                }
                Err(err) => {
                    match err.kind() {
                        FetchErrorKind::Transport | FetchErrorKind::Protocol => {
                            warn!(ticket, "Failed to fetch rental properties: {}", err);
                        }
                        FetchErrorKind::Decode => {
                            error!(ticket, "Rental API sent an unreadable response: {}", err);
                        }
                    }
                    RentalUiState::Error
                }
            };

            if ordering == RefreshOrdering::LatestIssued
                && issued.load(Ordering::SeqCst) != ticket
            {
                debug!(ticket, "Discarding result of superseded fetch");
                return;
            }
            state.send_replace(next);
        });
    }

    /// Current state
    pub fn state(&self) -> RentalUiState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<RentalUiState> {
        self.state.subscribe()
    }

    /// Wait until the state is no longer `Loading` and return it.
    pub async fn settled(&self) -> RentalUiState {
        let mut receiver = self.subscribe();
        // The sender lives as long as `self`, so the channel cannot close here.
        let settled = receiver
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state())
    }

    pub fn ordering(&self) -> RefreshOrdering {
        self.ordering
    }

    /// Number of fetches that have not finished yet
    pub fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock();
        while tasks.try_join_next().is_some() {}
        tasks.len()
    }
}
