//! Repository trait definitions for the domain layer.
//!
//! Release data is computed upstream; these traits describe how the page
//! service reaches it without caring where it came from.
//!
//! # Architecture
//!
//! - Traits define the contract for data access
//! - Implementations live in `crate::infrastructure::catalog`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ReleaseRepository`] - Product lookup by name

pub mod release_repository;

pub use release_repository::ReleaseRepository;

#[cfg(test)]
pub use release_repository::MockReleaseRepository;
