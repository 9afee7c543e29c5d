use crate::display::render::{View, render};
use crate::display::state::DisplayState;
use crate::fetch::{FetchError, fetch_reservations};
use crate::models::reservation::ReservationRecord;
use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{info, warn};

type FetchOutcome = Result<Vec<ReservationRecord>, FetchError>;

/// Fetch-and-render lifecycle for the booked tables list.
///
/// One instance owns one `DisplayState` and issues at most one fetch for its
/// whole life: `activate` is guarded so re-renders can never re-trigger it,
/// and `deactivate` (or drop) aborts an unresolved fetch so a late response
/// has nothing left to mutate.
pub struct ReservationDisplay {
    state: DisplayState,
    endpoint: String,
    activated: bool,
    in_flight: Option<JoinHandle<FetchOutcome>>,
}

impl ReservationDisplay {
    pub fn new(endpoint: String) -> Self {
        ReservationDisplay {
            state: DisplayState::default(),
            endpoint,
            activated: false,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Current frame, a pure projection of state. Safe to call any number of
    /// times; it never touches the fetch.
    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Begins the one fetch of this instance's life. Call it right after the
    /// first `view()`; every later call is a no-op.
    pub fn activate(&mut self, client: &Client) {
        if self.activated {
            return;
        }
        self.activated = true;

        let client = client.clone();
        let url = self.endpoint.clone();
        self.in_flight = Some(tokio::spawn(async move {
            fetch_reservations(&client, &url).await
        }));
    }

    /// Waits for the in-flight fetch and folds its outcome into state. Does
    /// nothing when no fetch is outstanding, so calling it after `deactivate`
    /// or a previous resolution is harmless.
    pub async fn resolve(&mut self) {
        let Some(handle) = self.in_flight.take() else {
            return;
        };

        match handle.await {
            Ok(outcome) => self.state.resolve(outcome),
            Err(join_err) if join_err.is_cancelled() => {
                // aborted by deactivate, the frame stays as it was
                info!("fetch cancelled before resolution");
            }
            Err(join_err) => {
                warn!("fetch task failed: {join_err}");
                self.state.is_loading = false;
                self.state.is_error = true;
            }
        }
    }

    /// Stops observing the fetch. An in-flight request is aborted so its
    /// result can never land on a display nobody is looking at.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for ReservationDisplay {
    fn drop(&mut self) {
        self.deactivate();
    }
}
