//! Flutter-facing bindings for truffle.

pub mod api;
