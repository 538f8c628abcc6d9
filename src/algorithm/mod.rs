//! Core algorithms: label reconciliation, feature encoding and vote combination.

pub mod encode;
pub mod reconcile;
pub mod vote;

pub use encode::encode;
pub use reconcile::{LabelMapping, LabelReconciler, MatchKind, reconcile};
pub use vote::plurality_vote;
