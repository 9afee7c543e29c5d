use std::env;

// upstream reservations endpoint, override with RESERVATIONS_URL in .env
pub const DEFAULT_ENDPOINT: &str = "https://striveschool-api.herokuapp.com/api/reservation";

pub fn endpoint() -> String {
    env::var("RESERVATIONS_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}
