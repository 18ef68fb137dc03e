use client::ApiClient;
use shared_types::{Case, Dispute, Document, Reminder, Report};

use crate::fetch::{fetch_documents_view, DisputeScope, ResourceSlice, ViewScope};
use crate::filters::{
    filter_cases, filter_disputes, filter_documents, filter_reports, sort_reminders, CaseCriteria,
    DisputeCriteria, DocumentCriteria, ReportCriteria,
};
use crate::reconcile::{patch_in_place, prepend_created, remove_by_id};

// List views all follow the same shape: one raw collection slice, the
// current criteria, a loading flag, and a derived `visible()` sequence
// recomputed on every read. Collections show most-recent-first, which is
// why confirmed creates prepend.

/// Case list (citizen: own cases; lawyer: assigned cases; the endpoint
/// scopes by the bearer token).
pub struct CaseListView {
    loading: bool,
    pub cases: ResourceSlice<Case>,
    pub criteria: CaseCriteria,
    scope: ViewScope,
}

impl CaseListView {
    pub fn new() -> Self {
        Self {
            loading: false,
            cases: ResourceSlice::empty(),
            criteria: CaseCriteria::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let cancel = self.scope.handle();
        let result = client.list_cases().await;
        if cancel.is_cancelled() {
            return;
        }
        self.cases = ResourceSlice::from_result("cases", result);
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<Case> {
        filter_cases(&self.cases.items, &self.criteria)
    }

    pub fn apply_updated(&mut self, updated: Case) {
        patch_in_place(&mut self.cases.items, updated);
    }
}

impl Default for CaseListView {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispute list, scoped to the signed-in role.
pub struct DisputeListView {
    dispute_scope: DisputeScope,
    loading: bool,
    pub disputes: ResourceSlice<Dispute>,
    pub criteria: DisputeCriteria,
    scope: ViewScope,
}

impl DisputeListView {
    pub fn new(dispute_scope: DisputeScope) -> Self {
        Self {
            dispute_scope,
            loading: false,
            disputes: ResourceSlice::empty(),
            criteria: DisputeCriteria::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let cancel = self.scope.handle();
        let result = match self.dispute_scope {
            DisputeScope::Citizen => client.list_disputes().await,
            DisputeScope::Lawyer => client.list_lawyer_disputes().await,
        };
        if cancel.is_cancelled() {
            return;
        }
        self.disputes = ResourceSlice::from_result("disputes", result);
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<Dispute> {
        filter_disputes(&self.disputes.items, &self.criteria)
    }

    pub fn apply_created(&mut self, created: Dispute) {
        prepend_created(&mut self.disputes.items, created);
    }

    pub fn apply_updated(&mut self, updated: Dispute) {
        patch_in_place(&mut self.disputes.items, updated);
    }

    /// Withdrawals leave the active list entirely.
    pub fn apply_withdrawn(&mut self, id: &str) {
        remove_by_id(&mut self.disputes.items, id);
    }
}

/// Document vault list. Also fetches the case list so uploads can be
/// attached to a case, which makes its load a two-resource fan-out.
pub struct DocumentListView {
    loading: bool,
    pub documents: ResourceSlice<Document>,
    pub cases: ResourceSlice<Case>,
    pub criteria: DocumentCriteria,
    scope: ViewScope,
}

impl DocumentListView {
    pub fn new() -> Self {
        Self {
            loading: false,
            documents: ResourceSlice::empty(),
            cases: ResourceSlice::empty(),
            criteria: DocumentCriteria::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let cancel = self.scope.handle();
        let Some(data) = fetch_documents_view(client, &cancel).await else {
            return;
        };
        self.documents = data.documents;
        self.cases = data.cases;
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<Document> {
        filter_documents(&self.documents.items, &self.criteria)
    }

    pub fn apply_uploaded(&mut self, stored: Document) {
        prepend_created(&mut self.documents.items, stored);
    }

    pub fn apply_deleted(&mut self, id: &str) {
        remove_by_id(&mut self.documents.items, id);
    }
}

impl Default for DocumentListView {
    fn default() -> Self {
        Self::new()
    }
}

/// Reminder list; display order comes from the shared sort, not criteria.
pub struct ReminderListView {
    loading: bool,
    pub reminders: ResourceSlice<Reminder>,
    scope: ViewScope,
}

impl ReminderListView {
    pub fn new() -> Self {
        Self {
            loading: false,
            reminders: ResourceSlice::empty(),
            scope: ViewScope::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let cancel = self.scope.handle();
        let result = client.list_reminders().await;
        if cancel.is_cancelled() {
            return;
        }
        self.reminders = ResourceSlice::from_result("reminders", result);
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<Reminder> {
        sort_reminders(&self.reminders.items)
    }

    pub fn apply_created(&mut self, created: Reminder) {
        prepend_created(&mut self.reminders.items, created);
    }

    pub fn apply_updated(&mut self, updated: Reminder) {
        patch_in_place(&mut self.reminders.items, updated);
    }

    pub fn apply_deleted(&mut self, id: &str) {
        remove_by_id(&mut self.reminders.items, id);
    }
}

impl Default for ReminderListView {
    fn default() -> Self {
        Self::new()
    }
}

/// Report list. Lawyers see their authored reports, citizens the shared
/// set; the caller picks the endpoint, the view is the same.
pub struct ReportListView {
    shared_only: bool,
    loading: bool,
    pub reports: ResourceSlice<Report>,
    pub criteria: ReportCriteria,
    scope: ViewScope,
}

impl ReportListView {
    pub fn authored() -> Self {
        Self::build(false)
    }

    pub fn shared() -> Self {
        Self::build(true)
    }

    fn build(shared_only: bool) -> Self {
        Self {
            shared_only,
            loading: false,
            reports: ResourceSlice::empty(),
            criteria: ReportCriteria::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let cancel = self.scope.handle();
        let result = if self.shared_only {
            client.list_shared_reports().await
        } else {
            client.list_reports().await
        };
        if cancel.is_cancelled() {
            return;
        }
        self.reports = ResourceSlice::from_result("reports", result);
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<Report> {
        filter_reports(&self.reports.items, &self.criteria)
    }

    pub fn apply_created(&mut self, created: Report) {
        prepend_created(&mut self.reports.items, created);
    }

    pub fn apply_finalized(&mut self, finalized: Report) {
        patch_in_place(&mut self.reports.items, finalized);
    }

    pub fn apply_deleted(&mut self, id: &str) {
        remove_by_id(&mut self.reports.items, id);
    }
}
