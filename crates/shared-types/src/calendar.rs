use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which kind of record a calendar event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Reminder,
    Case,
    Dispute,
    Hearing,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Case => "case",
            Self::Dispute => "dispute",
            Self::Hearing => "hearing",
        }
    }

    /// Glyph prefixed to event titles so the calendar can distinguish
    /// sources at a glance.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Reminder => "\u{23F0}",  // ⏰
            Self::Case => "\u{2696}\u{FE0F}",      // ⚖️
            Self::Dispute => "\u{1F91D}",  // 🤝
            Self::Hearing => "\u{1F4C5}",  // 📅
        }
    }
}

/// Id-only back-reference to the record an event was derived from. Used by
/// click-handling to navigate to the source; never an owning relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    pub kind: EventKind,
    pub id: String,
}

/// A derived calendar entry. Never persisted: recomputed from the raw
/// collections whenever they change, and discarded with the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique within one unifier output: "<kind>-<source id>".
    pub id: String,
    /// Source title prefixed with the kind glyph.
    pub title: String,
    /// Point event: start and end are the same instant.
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: EventRef,
}

impl CalendarEvent {
    /// Build a point event at `instant`, titling it with the kind glyph.
    pub fn point(
        kind: EventKind,
        source_id: impl Into<String>,
        title: &str,
        instant: DateTime<Utc>,
    ) -> Self {
        let source_id = source_id.into();
        Self {
            id: format!("{}-{}", kind.as_str(), source_id),
            title: format!("{} {}", kind.glyph(), title),
            start: instant,
            end: instant,
            kind,
            priority: None,
            status: None,
            description: None,
            source: EventRef {
                kind,
                id: source_id,
            },
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
