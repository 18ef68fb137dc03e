pub mod calendar;
pub mod fetch;
pub mod filters;
pub mod reconcile;
pub mod style;
pub mod views;

pub use calendar::unify_events;
pub use fetch::{DisputeScope, ResourceSlice, ViewScope};
pub use reconcile::{patch_in_place, prepend_created, remove_by_id, HasId};
