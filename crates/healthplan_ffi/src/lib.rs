//! Flutter-facing bindings for the health plan core.

pub mod api;
