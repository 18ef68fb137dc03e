use chrono::{DateTime, Duration, NaiveDate, Utc};
use shared_types::{CalendarEvent, Case, Dispute, Reminder};

use crate::calendar::unify_events;

/// Date-sorted calendar projection over the unified event feed. Rebuilt
/// from the raw collections whenever they change; holds nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub events: Vec<CalendarEvent>,
}

impl CalendarView {
    pub fn from_collections(
        reminders: &[Reminder],
        cases: &[Case],
        disputes: &[Dispute],
    ) -> Self {
        let mut events = unify_events(reminders, cases, disputes);
        // stable: coincident events keep unifier order
        events.sort_by_key(|e| e.start);
        Self { events }
    }

    /// Events falling on one calendar day (UTC).
    pub fn events_on(&self, day: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.start.date_naive() == day)
            .collect()
    }

    /// Events within the next `horizon_days` of `now`, inclusive of `now`.
    pub fn upcoming(&self, now: DateTime<Utc>, horizon_days: i64) -> Vec<&CalendarEvent> {
        let until = now + Duration::days(horizon_days);
        self.events
            .iter()
            .filter(|e| e.start >= now && e.start <= until)
            .collect()
    }
}
