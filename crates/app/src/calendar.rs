use shared_types::{CalendarEvent, Case, Dispute, EventKind, Reminder};

/// Merge the dashboard's heterogeneous records into one flat sequence of
/// calendar events.
///
/// One event per reminder (at its due date, carrying the reminder's
/// priority), one per case with a scheduled hearing, one per dispute with a
/// scheduled hearing. Records without a hearing date contribute nothing.
/// Output order is reminders, then cases, then disputes, each in source
/// order; the consuming calendar view re-sorts by date, so no ordering
/// beyond that is promised. Coincident instants stay as distinct events.
///
/// Pure: identical inputs always produce value-identical output.
pub fn unify_events(
    reminders: &[Reminder],
    cases: &[Case],
    disputes: &[Dispute],
) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(reminders.len() + cases.len() + disputes.len());

    for reminder in reminders {
        let mut event = CalendarEvent::point(
            EventKind::Reminder,
            reminder.id.clone(),
            &reminder.title,
            reminder.due_date,
        )
        .with_priority(reminder.priority.as_str());
        if let Some(description) = &reminder.description {
            event = event.with_description(description.clone());
        }
        events.push(event);
    }

    for case in cases {
        if let Some(hearing) = case.next_hearing {
            events.push(
                CalendarEvent::point(EventKind::Case, case.id.clone(), &case.title, hearing)
                    .with_status(case.status.as_str()),
            );
        }
    }

    for dispute in disputes {
        if let Some(hearing) = dispute.next_hearing {
            events.push(
                CalendarEvent::point(
                    EventKind::Dispute,
                    dispute.id.clone(),
                    &dispute.title,
                    hearing,
                )
                .with_status(dispute.status.as_str()),
            );
        }
    }

    events
}
