use client::ApiClient;
use shared_types::{CalendarEvent, Case, Dispute, Reminder, UserRole};

use crate::calendar::unify_events;
use crate::fetch::{fetch_dashboard, DisputeScope, ResourceSlice, ViewScope};
use crate::filters::sort_reminders;
use crate::reconcile::{patch_in_place, prepend_created, remove_by_id};

/// What the signed-in role may do on the dashboard. One parameterized view
/// serves both roles; pages never branch on the role string directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCapabilities {
    pub role: UserRole,
    pub dispute_scope: DisputeScope,
    /// Lawyers decide on case assignments.
    pub can_accept_cases: bool,
    /// Citizens open disputes.
    pub can_create_disputes: bool,
    /// Lawyers author and finalize reports.
    pub can_author_reports: bool,
    /// Lawyers browse documents their clients shared.
    pub can_view_client_documents: bool,
}

impl RoleCapabilities {
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Citizen => Self {
                role,
                dispute_scope: DisputeScope::Citizen,
                can_accept_cases: false,
                can_create_disputes: true,
                can_author_reports: false,
                can_view_client_documents: false,
            },
            UserRole::Lawyer | UserRole::Admin => Self {
                role,
                dispute_scope: DisputeScope::Lawyer,
                can_accept_cases: true,
                can_create_disputes: false,
                can_author_reports: true,
                can_view_client_documents: true,
            },
        }
    }
}

/// Headless dashboard state: the raw collections, a loading flag, and
/// per-slice errors. A rendering shell drives `load`, reads the slices,
/// and calls the `apply_*` helpers after confirmed mutations.
pub struct DashboardView {
    capabilities: RoleCapabilities,
    loading: bool,
    pub reminders: ResourceSlice<Reminder>,
    pub cases: ResourceSlice<Case>,
    pub disputes: ResourceSlice<Dispute>,
    scope: ViewScope,
}

impl DashboardView {
    pub fn new(role: UserRole) -> Self {
        Self {
            capabilities: RoleCapabilities::for_role(role),
            loading: false,
            reminders: ResourceSlice::empty(),
            cases: ResourceSlice::empty(),
            disputes: ResourceSlice::empty(),
            scope: ViewScope::new(),
        }
    }

    pub fn capabilities(&self) -> RoleCapabilities {
        self.capabilities
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Fan-out fetch of all three collections. Always leaves the view
    /// fully resolved (loading cleared) once every sibling request has
    /// settled, unless the scope was cancelled mid-flight, in which case
    /// nothing is touched.
    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let cancel = self.scope.handle();
        let Some(data) = fetch_dashboard(client, self.capabilities.dispute_scope, &cancel).await
        else {
            return;
        };
        self.reminders = data.reminders;
        self.cases = data.cases;
        self.disputes = data.disputes;
        self.loading = false;
    }

    /// Manual try-again path: discard everything and refetch.
    pub async fn reload(&mut self, client: &ApiClient) {
        self.load(client).await;
    }

    /// Unified calendar feed over the current collections. Recomputed on
    /// demand; the calendar view sorts it by date.
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        unify_events(
            &self.reminders.items,
            &self.cases.items,
            &self.disputes.items,
        )
    }

    /// Reminders in display order: open first, then completed, each
    /// ascending by due date.
    pub fn sorted_reminders(&self) -> Vec<Reminder> {
        sort_reminders(&self.reminders.items)
    }

    // --- Confirmed-mutation appliers ---

    pub fn apply_case_updated(&mut self, updated: Case) {
        patch_in_place(&mut self.cases.items, updated);
    }

    pub fn apply_dispute_updated(&mut self, updated: Dispute) {
        patch_in_place(&mut self.disputes.items, updated);
    }

    pub fn apply_dispute_created(&mut self, created: Dispute) {
        prepend_created(&mut self.disputes.items, created);
    }

    pub fn apply_dispute_withdrawn(&mut self, id: &str) {
        remove_by_id(&mut self.disputes.items, id);
    }

    pub fn apply_reminder_created(&mut self, created: Reminder) {
        prepend_created(&mut self.reminders.items, created);
    }

    pub fn apply_reminder_updated(&mut self, updated: Reminder) {
        patch_in_place(&mut self.reminders.items, updated);
    }

    pub fn apply_reminder_removed(&mut self, id: &str) {
        remove_by_id(&mut self.reminders.items, id);
    }
}
