use client::ApiClient;
use shared_types::{Case, ClientError, Dispute, Document, Reminder};
use tokio_util::sync::CancellationToken;

/// Cancellation scope tied to a view's lifetime. Dropping the scope (or
/// calling `cancel`) marks every in-flight fetch started under it: when a
/// fetch settles after that point its result is discarded, so a torn-down
/// view is never written to.
#[derive(Debug)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// A handle for a fetch to carry. Handles observe cancellation of the
    /// scope they came from.
    pub fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// One resource's share of a fan-out fetch. A failed resource degrades to
/// an empty collection but keeps its error, so the view can say which slice
/// is missing instead of showing a silently empty list.
#[derive(Debug)]
pub struct ResourceSlice<T> {
    pub items: Vec<T>,
    pub error: Option<ClientError>,
}

impl<T> ResourceSlice<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }

    pub fn from_result(resource: &str, result: Result<Vec<T>, ClientError>) -> Self {
        match result {
            Ok(items) => Self { items, error: None },
            Err(error) => {
                tracing::error!(resource, error = %error, "resource fetch failed");
                Self {
                    items: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

impl<T> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Which dispute listing a view reads: a citizen sees their own disputes,
/// a lawyer sees disputes assigned to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputeScope {
    Citizen,
    Lawyer,
}

/// The dashboard's raw collections, one slice per resource.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub reminders: ResourceSlice<Reminder>,
    pub cases: ResourceSlice<Case>,
    pub disputes: ResourceSlice<Dispute>,
}

/// Fan-out fetch of the dashboard's resources. All three requests run
/// concurrently; each slice settles independently (no ordering guarantees
/// between siblings) and a failure in one never aborts the others.
///
/// Returns `None` when the scope was cancelled before the last request
/// settled; the caller must treat that as "view gone" and touch nothing.
pub async fn fetch_dashboard(
    client: &ApiClient,
    scope: DisputeScope,
    cancel: &CancellationToken,
) -> Option<DashboardData> {
    let disputes_fut = async {
        match scope {
            DisputeScope::Citizen => client.list_disputes().await,
            DisputeScope::Lawyer => client.list_lawyer_disputes().await,
        }
    };

    let (reminders, cases, disputes) = tokio::join!(
        client.list_reminders(),
        client.list_cases(),
        disputes_fut,
    );

    if cancel.is_cancelled() {
        tracing::debug!("view torn down before dashboard fetch settled; dropping result");
        return None;
    }

    Some(DashboardData {
        reminders: ResourceSlice::from_result("reminders", reminders),
        cases: ResourceSlice::from_result("cases", cases),
        disputes: ResourceSlice::from_result("disputes", disputes),
    })
}

/// The document vault's raw collections: the vault itself plus the case
/// list for the attach-to-case picker.
#[derive(Debug, Default)]
pub struct DocumentsData {
    pub documents: ResourceSlice<Document>,
    pub cases: ResourceSlice<Case>,
}

/// Fan-out fetch for the documents view, same contract as
/// [`fetch_dashboard`].
pub async fn fetch_documents_view(
    client: &ApiClient,
    cancel: &CancellationToken,
) -> Option<DocumentsData> {
    let (documents, cases) = tokio::join!(client.list_documents(), client.list_cases());

    if cancel.is_cancelled() {
        tracing::debug!("view torn down before documents fetch settled; dropping result");
        return None;
    }

    Some(DocumentsData {
        documents: ResourceSlice::from_result("documents", documents),
        cases: ResourceSlice::from_result("cases", cases),
    })
}
