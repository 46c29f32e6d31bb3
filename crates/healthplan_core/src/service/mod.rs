//! Core use-case services.
//!
//! # Responsibility
//! - Derive saved plans and reminders from the draft plan.
//! - Orchestrate container calls into presentation-level operations.

pub mod health_service;
pub mod plan_archiver;
