//! Classification-space plot construction.
//!
//! # Responsibility
//! - Map paper code lists onto (letter axis, number) coordinates.
//! - Assemble one styled series per plottable paper plus a static
//!   reference layer.
//! - Track which paper is highlighted across re-filtering.
//! - Export assembled plots as Plotly-compatible JSON for render hosts.
//!
//! # Invariants
//! - Papers without any mappable code never produce a series.
//! - At most one series is rendered in highlighted weight.

pub mod assembler;
pub mod coords;
pub mod figure;
pub mod highlight;
