use chrono::NaiveDateTime;
use serde::Deserialize;

/// One booked table as returned by the reservations endpoint.
///
/// The payload carries more fields than the display consumes (phone, smoking,
/// special requests); unknown keys are ignored on parse.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReservationRecord {
    /// upstream document id, used as the stable row identity when present
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "numberOfPeople", default)]
    pub number_of_people: Option<u32>,
}

impl ReservationRecord {
    /// Best-effort parse of `date_time`. The endpoint sends ISO 8601, with or
    /// without seconds and a trailing zone; anything unparseable falls back
    /// to the raw text at the render site.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&self.date_time) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(&self.date_time, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.date_time, "%Y-%m-%dT%H:%M"))
            .ok()
    }
}
