pub mod calendar;
pub mod dashboard;
pub mod lists;

pub use calendar::CalendarView;
pub use dashboard::{DashboardView, RoleCapabilities};
pub use lists::{
    CaseListView, DisputeListView, DocumentListView, ReminderListView, ReportListView,
};
