//! Repository layer: ownership of the publication registries.
//!
//! # Responsibility
//! - Define the storage contract used by the service layer.
//! - Keep registry mechanics (ordering, uniqueness, integrity) out of the
//!   query code.
//!
//! # Invariants
//! - Repository writes reject dangling author/magazine references.
//! - Repository APIs return semantic errors (`*NotFound`, `Duplicate*`).

pub mod publication_repo;
