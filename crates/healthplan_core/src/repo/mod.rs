//! In-memory state containers.
//!
//! # Responsibility
//! - Own the goal, draft plan, saved plan and reminder collections.
//! - Expose their operations as the only mutation surface.
//!
//! # Invariants
//! - Containers are not internally synchronized; callers serialize access.
//! - Blank required fields are rejected before any mutation.

pub mod goal_catalog;
pub mod plan_builder;
pub mod plan_history;
pub mod reminder_store;
