//! Domain layer containing catalog entities and the era partition.
//!
//! # Architecture
//!
//! - [`entities`] - Release records, summary statistics, and catalog products
//! - [`era`] - The fixed `.cc` / `.nyc` site identity split
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Page assembly lives in [`crate::application::services`].

pub mod entities;
pub mod era;
pub mod repositories;
