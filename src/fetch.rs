use crate::models::reservation::ReservationRecord;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

/// The two ways the single fetch can go wrong. Both collapse to the same
/// error indicator in the rendered output; the distinction only reaches the
/// logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// got a response, but the server said no
    #[error("reservations endpoint returned {status}")]
    Server { status: StatusCode },
    /// never got a usable response: connect/DNS/timeout, or a body that did
    /// not parse as a reservation list
    #[error("reservations request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetches the full reservation list. One GET, no parameters, no retries; a
/// failure is terminal for the activation that issued it.
pub async fn fetch_reservations(
    client: &Client,
    url: &str,
) -> Result<Vec<ReservationRecord>, FetchError> {
    info!("fetching reservations from {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        error!("reservations endpoint returned {status}");
        return Err(FetchError::Server { status });
    }

    let reservations: Vec<ReservationRecord> = response.json().await?;
    info!("loaded {} reservations", reservations.len());
    Ok(reservations)
}
