//! Unique id sources for goals, plan items, plans and reminders.
//!
//! # Responsibility
//! - Hide id allocation behind `IdGenerator` so tests can assert exact ids.
//! - Provide a clock-based source that stays unique within one millisecond.
//!
//! # Invariants
//! - A generator never returns the same value twice over its lifetime.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of fresh, unique string ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

pub type BoxedIdGenerator = Box<dyn IdGenerator>;

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Epoch-millisecond ids that never repeat.
///
/// When the clock has not advanced (or went backwards) since the last call,
/// the previous value plus one is issued instead.
#[derive(Debug, Clone, Default)]
pub struct ClockIdGenerator {
    last_ms: i64,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_after(&mut self, now_ms: i64) -> i64 {
        let value = if now_ms > self.last_ms {
            now_ms
        } else {
            self.last_ms + 1
        };
        self.last_ms = value;
        value
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> String {
        self.next_after(Utc::now().timestamp_millis()).to_string()
    }
}

/// Counter ids `1, 2, 3, ...`; deterministic, meant for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let value = self.next;
        self.next += 1;
        value.to_string()
    }
}

/// Configurable choice of id source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    #[default]
    Uuid,
    Clock,
    Sequential,
}

impl IdSource {
    /// Builds a fresh generator of this kind.
    pub fn generator(self) -> BoxedIdGenerator {
        match self {
            Self::Uuid => Box::new(UuidIdGenerator),
            Self::Clock => Box::new(ClockIdGenerator::new()),
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

/// Draws ids from `ids` until one is not `taken`.
///
/// Seeded records (for example the sample reminders `1..3`) may already hold
/// values a generator would produce.
pub(crate) fn fresh_id(ids: &mut dyn IdGenerator, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = ids.next_id();
        if !taken(candidate.as_str()) {
            return candidate;
        }
    }
}
