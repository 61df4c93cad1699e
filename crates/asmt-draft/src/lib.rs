//! In-memory assignment draft engine.
//!
//! The draft is a nested, identity-aware tree (questions -> answers +
//! media) supporting arbitrary local edits while keeping a stable ordering
//! invariant, coordinating uploads that block submission, and feeding the
//! reconciliation payload builder.
//!
//! - **Store** (`store`): single owner of the tree; create-mode seeding
//!   and edit-mode hydration.
//! - **Operations** (`ops`): the mutation API; every call re-runs the
//!   order reconciler before returning.
//! - **Order** (`order`): the order-uniqueness invariant.
//! - **Uploads** (`upload`): the one cross-cutting concurrency gate.

pub mod error;
pub mod ops;
pub mod order;
pub mod store;
pub mod upload;

pub use error::{DraftError, UploadError};
pub use order::{next_order, reconcile};
pub use store::AssignmentDraft;
pub use upload::{UploadCoordinator, UploadPhase, UploadTicket};
