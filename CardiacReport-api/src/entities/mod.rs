// Public API entities

pub mod common;
pub mod study;

pub use common::PublicErrorResponse;
pub use study::{StoreSnapshotRequest, StoreSnapshotResponse, StudyResponse};
