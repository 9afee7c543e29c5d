use crate::fetch::FetchError;
use crate::models::reservation::ReservationRecord;

/// The record driving what the component renders. Owned exclusively by one
/// `ReservationDisplay`; only that component's own fetch continuation ever
/// mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// always a valid list, empty until the first successful load,
    /// insertion order = server response order
    pub reservations: Vec<ReservationRecord>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState {
            reservations: Vec::new(),
            is_loading: true,
            is_error: false,
        }
    }
}

/// The three reachable states of the lifecycle. `Loaded` and `Failed` are
/// both terminal for an activation; there is no way back into `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
    Failed,
}

impl DisplayState {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.is_error {
            Phase::Failed
        } else {
            Phase::Loaded
        }
    }

    /// Folds the single fetch outcome into state. Called at most once per
    /// activation; a failure leaves `reservations` as they were.
    pub fn resolve(&mut self, outcome: Result<Vec<ReservationRecord>, FetchError>) {
        self.is_loading = false;
        match outcome {
            Ok(reservations) => self.reservations = reservations,
            Err(_) => self.is_error = true,
        }
    }
}
