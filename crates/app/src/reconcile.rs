use shared_types::{Case, Dispute, Document, Reminder, Report};

/// Records the reconciler can address inside a collection.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Case {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Dispute {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Report {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Reminder {
    fn id(&self) -> &str {
        &self.id
    }
}

// The reconciliation policy, applied uniformly: a mutation is only ever
// applied from the record the server returned, after the server confirmed
// it. Nothing here runs speculatively, and a failed request leaves the
// collection untouched because the caller never reaches these functions.

/// A confirmed create: the new record goes to the head of the collection.
/// List views display most-recent-first, which this convention feeds.
pub fn prepend_created<T>(items: &mut Vec<T>, created: T) {
    items.insert(0, created);
}

/// A confirmed update: replace the element with the same id. Returns false
/// (and leaves the collection alone) when the record is not present locally,
/// e.g. the view was filtered server-side.
pub fn patch_in_place<T: HasId>(items: &mut Vec<T>, updated: T) -> bool {
    match items.iter().position(|item| item.id() == updated.id()) {
        Some(idx) => {
            items[idx] = updated;
            true
        }
        None => {
            tracing::warn!(id = updated.id(), "updated record not in local collection");
            false
        }
    }
}

/// A confirmed delete/withdraw: drop the element with the matching id.
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
