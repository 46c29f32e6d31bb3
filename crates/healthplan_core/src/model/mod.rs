//! Domain records for goals, daily plans and reminders.
//!
//! # Responsibility
//! - Define the value types shared by catalogs, builders and stores.
//! - Keep wire naming stable for the presentation layer (`planId`, `goalName`).
//!
//! # Invariants
//! - Records are plain values: archived plans and reminders hold copies, never
//!   references into live containers.
//! - Ids are opaque strings issued by an `IdGenerator`.

pub mod goal;
pub mod plan;
pub mod reminder;
