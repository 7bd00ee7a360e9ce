//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Only the error type and the seam to external book metadata.

pub mod errors;
pub mod lookup;

pub use errors::{DomainError, NOT_FOUND_DETAIL};
pub use lookup::{VolumeLookup, VolumeSummary};
