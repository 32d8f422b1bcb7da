//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for external collaborators, currently the persistent
//! store backing the community confirmation core.

pub mod store;
