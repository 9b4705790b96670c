//! Classification registry.
//!
//! # Responsibility
//! - Provide display descriptions for JEL classification codes.
//! - Own the fixed, ordered category-letter axis used by plots.
//!
//! # Invariants
//! - Registry lookups are display-only and never fail; unmapped input
//!   degrades to placeholder text.

pub mod jel;
mod table;
