use shared_types::{
    CaseStatus, DisputePriority, DisputeStatus, DocumentStatus, OfferStatus, ReminderPriority,
    ReportStatus,
};

/// Visual weight for a badge/chip. Every page resolves status colors
/// through this one lookup, so the same status can never render two ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Neutral => "tone-neutral",
            Self::Info => "tone-info",
            Self::Success => "tone-success",
            Self::Warning => "tone-warning",
            Self::Danger => "tone-danger",
        }
    }
}

pub fn case_status_tone(status: CaseStatus) -> Tone {
    match status {
        CaseStatus::Pending => Tone::Warning,
        CaseStatus::InProgress => Tone::Info,
        CaseStatus::Resolved => Tone::Success,
        CaseStatus::Closed => Tone::Neutral,
        CaseStatus::Rejected => Tone::Danger,
    }
}

pub fn dispute_status_tone(status: DisputeStatus) -> Tone {
    match status {
        DisputeStatus::Draft => Tone::Neutral,
        DisputeStatus::Submitted | DisputeStatus::UnderReview => Tone::Warning,
        DisputeStatus::Assigned | DisputeStatus::InProgress | DisputeStatus::Mediation => {
            Tone::Info
        }
        DisputeStatus::SettlementPending => Tone::Warning,
        DisputeStatus::Resolved => Tone::Success,
        DisputeStatus::Closed => Tone::Neutral,
        DisputeStatus::Withdrawn => Tone::Danger,
    }
}

pub fn document_status_tone(status: DocumentStatus) -> Tone {
    match status {
        DocumentStatus::Pending => Tone::Warning,
        DocumentStatus::Approved => Tone::Success,
        DocumentStatus::Rejected => Tone::Danger,
    }
}

pub fn report_status_tone(status: ReportStatus) -> Tone {
    match status {
        ReportStatus::Draft => Tone::Warning,
        ReportStatus::Final => Tone::Success,
    }
}

pub fn offer_status_tone(status: OfferStatus) -> Tone {
    match status {
        OfferStatus::Pending => Tone::Warning,
        OfferStatus::Accepted => Tone::Success,
        OfferStatus::Rejected => Tone::Danger,
    }
}

pub fn dispute_priority_tone(priority: DisputePriority) -> Tone {
    match priority {
        DisputePriority::Low => Tone::Neutral,
        DisputePriority::Medium => Tone::Info,
        DisputePriority::High => Tone::Warning,
        DisputePriority::Urgent => Tone::Danger,
    }
}

pub fn reminder_priority_tone(priority: ReminderPriority) -> Tone {
    match priority {
        ReminderPriority::Low => Tone::Neutral,
        ReminderPriority::Medium => Tone::Info,
        ReminderPriority::High => Tone::Danger,
    }
}
