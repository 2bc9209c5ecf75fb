//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`catalog`] - Release repository backed by a JSON catalog export

pub mod catalog;
