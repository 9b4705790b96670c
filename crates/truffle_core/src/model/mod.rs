//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical paper record, classification code and journal
//!   style values used by filtering and plotting.
//! - Own load-time validation rules for catalog entries.
//!
//! # Invariants
//! - Records are immutable after load and identified by a stable `RecordId`.
//! - Every classification code is syntactically `letters + number<=99`.

pub mod code;
pub mod journal;
pub mod paper;
