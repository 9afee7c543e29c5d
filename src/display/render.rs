use crate::display::state::DisplayState;
use crate::models::reservation::ReservationRecord;

pub const HEADING: &str = "Booked tables!";
pub const ERROR_ALERT: &str = "Could not load reservations.";
pub const LOADING_NOTICE: &str = "Loading reservations...";

/// One rendered list row. `key` is the record's upstream id when the payload
/// provides one; otherwise the positional index stands in. The index fallback
/// misbehaves under reordering and is kept only for id-less payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub label: String,
}

/// The tree of presentational primitives one frame is made of: a constant
/// heading, an alert iff the fetch failed, a spinner iff it is still out,
/// and one row per reservation. The styling toolkit that would consume this
/// is out of scope; `to_text` is the stand-in presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub heading: &'static str,
    pub alert: Option<&'static str>,
    pub spinner: bool,
    pub rows: Vec<Row>,
}

impl View {
    /// plain-text projection, one line per primitive
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(self.heading);
        out.push('\n');
        if let Some(alert) = self.alert {
            out.push_str(alert);
            out.push('\n');
        }
        if self.spinner {
            out.push_str(LOADING_NOTICE);
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str("  - ");
            out.push_str(&row.label);
            out.push('\n');
        }
        out
    }
}

/// Pure projection of state into a frame. Calling it twice on the same state
/// yields the same frame; it never touches the fetch.
pub fn render(state: &DisplayState) -> View {
    let rows = state
        .reservations
        .iter()
        .enumerate()
        .map(|(i, record)| Row {
            key: record.id.clone().unwrap_or_else(|| i.to_string()),
            label: row_label(record),
        })
        .collect();

    View {
        heading: HEADING,
        alert: state.is_error.then_some(ERROR_ALERT),
        spinner: state.is_loading,
        rows,
    }
}

fn row_label(record: &ReservationRecord) -> String {
    // normalize parseable timestamps, pass free text through as-is
    let when = record
        .starts_at()
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_else(|| record.date_time.clone());

    match record.number_of_people {
        Some(n) => format!("{} at {when} ({n} people)", record.name),
        None => format!("{} at {when}", record.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use reqwest::StatusCode;

    fn loaded_state(json: &str) -> DisplayState {
        let mut state = DisplayState::default();
        state.resolve(Ok(serde_json::from_str(json).unwrap()));
        state
    }

    #[test]
    fn loading_frame_has_spinner_and_nothing_else() {
        let view = render(&DisplayState::default());
        assert_eq!(view.heading, HEADING);
        assert!(view.spinner);
        assert_eq!(view.alert, None);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn loaded_frame_shows_name_and_datetime() {
        let state = loaded_state(
            r#"[{"_id": "abc123", "name": "Table 3", "dateTime": "2024-01-01T19:00"}]"#,
        );
        let view = render(&state);

        assert!(!view.spinner);
        assert_eq!(view.alert, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].key, "abc123");
        assert!(view.rows[0].label.contains("Table 3"));
        assert!(view.rows[0].label.contains("2024-01-01T19:00"));
    }

    #[test]
    fn row_keys_fall_back_to_position_without_ids() {
        let state = loaded_state(
            r#"[{"name": "a", "dateTime": "x"}, {"name": "b", "dateTime": "y"}]"#,
        );
        let view = render(&state);
        assert_eq!(view.rows[0].key, "0");
        assert_eq!(view.rows[1].key, "1");
    }

    #[test]
    fn failed_frame_shows_alert_and_no_rows() {
        let mut state = DisplayState::default();
        state.resolve(Err(FetchError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }));
        let view = render(&state);

        assert_eq!(view.alert, Some(ERROR_ALERT));
        assert!(!view.spinner);
        assert!(view.rows.is_empty());
        assert!(view.to_text().contains(ERROR_ALERT));
    }

    #[test]
    fn empty_loaded_frame_has_no_spinner_no_alert_no_rows() {
        let view = render(&loaded_state("[]"));
        assert_eq!(view.alert, None);
        assert!(!view.spinner);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let state = loaded_state(
            r#"[{"name": "Table 3", "dateTime": "2024-01-01T19:00", "numberOfPeople": 2}]"#,
        );
        assert_eq!(render(&state), render(&state));
        assert_eq!(render(&state).to_text(), render(&state).to_text());
    }
}
