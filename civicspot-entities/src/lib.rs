//#![deny(missing_docs)] // TODO: Document the issue and location entities and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # civicspot-entities
//!
//! Reusable, agnostic domain entities for CivicSpot.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod issue;
pub mod location;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
