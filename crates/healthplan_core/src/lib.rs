//! Core domain logic for the health plan tracker.
//! This crate is the single source of truth for goal, plan and reminder
//! invariants; presentation layers call in through `HealthService` or the
//! individual containers.

pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::SessionConfig;
pub use error::{CoreError, CoreResult, PreconditionError, ValidationError};
pub use id::{
    BoxedIdGenerator, ClockIdGenerator, IdGenerator, IdSource, SequentialIdGenerator,
    UuidIdGenerator,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::goal::{default_goals, Goal, GoalId};
pub use model::plan::{PlanId, PlanItem, PlanItemId, SavedPlan};
pub use model::reminder::{default_reminders, Reminder, ReminderColor, ReminderId};
pub use repo::goal_catalog::GoalCatalog;
pub use repo::plan_builder::PlanBuilder;
pub use repo::plan_history::PlanHistory;
pub use repo::reminder_store::ReminderStore;
pub use service::health_service::HealthService;
pub use service::plan_archiver::{ArchivedPlan, PlanArchiver};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
