//! Integration test utilities for the messaging data model
//!
//! This crate provides fixtures and helpers for exercising the payload
//! boundary, entity derivations, and the search index together.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
