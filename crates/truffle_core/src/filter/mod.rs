//! Paper filtering.
//!
//! # Responsibility
//! - Model the user's current selections as an explicit value object.
//! - Apply journal, period and topic predicates over catalog records.
//!
//! # Invariants
//! - Filtering preserves input order.
//! - An empty journal selection yields an empty result.

pub mod engine;
