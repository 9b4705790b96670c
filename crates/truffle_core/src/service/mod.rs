//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, filter and plot components into per-render views.
//! - Keep render hosts (CLI, FFI) decoupled from component wiring.

pub mod browse_service;
