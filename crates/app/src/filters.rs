use shared_types::{Case, Dispute, Document, Reminder, Report};

/// Sentinel for a categorical filter that matches everything.
pub const FILTER_ALL: &str = "all";

fn matches_filter(value: &str, filter: &str) -> bool {
    filter == FILTER_ALL || value == filter
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// Each view derives its displayed sequence by re-running one of these on
// every input change. They are pure: no clock, no I/O, no ordering besides
// what the input already has, so identical inputs give identical output.

#[derive(Debug, Clone)]
pub struct CaseCriteria {
    pub search: String,
    pub status: String,
    pub case_type: String,
}

impl Default for CaseCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FILTER_ALL.to_string(),
            case_type: FILTER_ALL.to_string(),
        }
    }
}

/// Search matches title, citizen name, or an id substring,
/// case-insensitively. Categorical filters AND together.
pub fn filter_cases(cases: &[Case], criteria: &CaseCriteria) -> Vec<Case> {
    let needle = criteria.search.trim();
    cases
        .iter()
        .filter(|case| {
            let search_ok = needle.is_empty()
                || contains_ci(&case.title, needle)
                || contains_ci(&case.citizen.name, needle)
                || contains_ci(&case.id, needle);
            search_ok
                && matches_filter(case.status.as_str(), &criteria.status)
                && matches_filter(case.case_type.as_str(), &criteria.case_type)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct DisputeCriteria {
    pub search: String,
    pub status: String,
    pub category: String,
}

impl Default for DisputeCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FILTER_ALL.to_string(),
            category: FILTER_ALL.to_string(),
        }
    }
}

/// Search matches title, either party's name, or an id substring.
pub fn filter_disputes(disputes: &[Dispute], criteria: &DisputeCriteria) -> Vec<Dispute> {
    let needle = criteria.search.trim();
    disputes
        .iter()
        .filter(|dispute| {
            let search_ok = needle.is_empty()
                || contains_ci(&dispute.title, needle)
                || contains_ci(&dispute.plaintiff.name, needle)
                || contains_ci(&dispute.defendant.name, needle)
                || contains_ci(&dispute.id, needle);
            search_ok
                && matches_filter(dispute.status.as_str(), &criteria.status)
                && matches_filter(dispute.category.as_str(), &criteria.category)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct DocumentCriteria {
    pub search: String,
    pub status: String,
    pub category: String,
}

impl Default for DocumentCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FILTER_ALL.to_string(),
            category: FILTER_ALL.to_string(),
        }
    }
}

/// Search matches title or file name.
pub fn filter_documents(documents: &[Document], criteria: &DocumentCriteria) -> Vec<Document> {
    let needle = criteria.search.trim();
    documents
        .iter()
        .filter(|doc| {
            let search_ok = needle.is_empty()
                || contains_ci(&doc.title, needle)
                || contains_ci(&doc.file_name, needle);
            search_ok
                && matches_filter(doc.status.as_str(), &criteria.status)
                && matches_filter(doc.category.as_str(), &criteria.category)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct ReportCriteria {
    pub search: String,
    pub status: String,
    pub report_type: String,
}

impl Default for ReportCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FILTER_ALL.to_string(),
            report_type: FILTER_ALL.to_string(),
        }
    }
}

/// Search matches title or the linked case name.
pub fn filter_reports(reports: &[Report], criteria: &ReportCriteria) -> Vec<Report> {
    let needle = criteria.search.trim();
    reports
        .iter()
        .filter(|report| {
            let search_ok = needle.is_empty()
                || contains_ci(&report.title, needle)
                || report
                    .case_name
                    .as_deref()
                    .map(|name| contains_ci(name, needle))
                    .unwrap_or(false);
            search_ok
                && matches_filter(report.status.as_str(), &criteria.status)
                && matches_filter(report.report_type.as_str(), &criteria.report_type)
        })
        .cloned()
        .collect()
}

/// Display order for reminders: open items before completed ones, each
/// group ascending by due date. The sort is stable, so equal keys keep
/// their source order.
pub fn sort_reminders(reminders: &[Reminder]) -> Vec<Reminder> {
    let mut out = reminders.to_vec();
    out.sort_by_key(|r| (r.completed, r.due_date));
    out
}
