//! Flat reminder collection.
//!
//! # Responsibility
//! - Hold manual and plan-derived reminders in one ordered list.
//! - Provide the per-plan and manual-only views used for grouping.
//!
//! # Invariants
//! - New reminders, single or batch, enter at the front.
//! - Reminder ids are unique within the store.
//! - Orphaned reminders (plan deleted) stay until removed individually.

use crate::error::{require_present, ValidationError};
use crate::id::{fresh_id, BoxedIdGenerator};
use crate::model::reminder::{default_reminders, Reminder, ReminderColor};

/// Accent given to reminders created by hand.
pub const MANUAL_REMINDER_COLOR: ReminderColor = ReminderColor::Blue;

pub struct ReminderStore {
    reminders: Vec<Reminder>,
    ids: BoxedIdGenerator,
}

impl ReminderStore {
    pub fn new(ids: BoxedIdGenerator) -> Self {
        Self::with_reminders(Vec::new(), ids)
    }

    /// Creates a store preloaded with the sample reminders.
    pub fn with_defaults(ids: BoxedIdGenerator) -> Self {
        Self::with_reminders(default_reminders(), ids)
    }

    pub fn with_reminders(reminders: Vec<Reminder>, ids: BoxedIdGenerator) -> Self {
        Self { reminders, ids }
    }

    /// Creates a manual reminder in front of the list.
    ///
    /// # Errors
    /// - `ValidationError` when `time` or `content` is empty. Values are
    ///   stored exactly as entered.
    pub fn add_manual(&mut self, time: &str, content: &str) -> Result<Reminder, ValidationError> {
        let time = require_present("time", time)?;
        let content = require_present("content", content)?;

        let reminders = &self.reminders;
        let id = fresh_id(self.ids.as_mut(), |candidate| {
            reminders.iter().any(|reminder| reminder.id == candidate)
        });
        let reminder = Reminder::manual(id, time, content, MANUAL_REMINDER_COLOR);
        self.reminders.insert(0, reminder.clone());
        Ok(reminder)
    }

    /// Puts a batch in front of the list, keeping the batch order.
    pub fn prepend_batch(&mut self, batch: Vec<Reminder>) {
        self.reminders.splice(0..0, batch);
    }

    /// Removes a reminder by id. Missing ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Reminder> {
        let index = self
            .reminders
            .iter()
            .position(|reminder| reminder.id == id)?;
        Some(self.reminders.remove(index))
    }

    /// Reminders derived from `plan_id`, in store order.
    pub fn by_plan(&self, plan_id: &str) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|reminder| reminder.belongs_to(plan_id))
            .collect()
    }

    /// Reminders with no plan back-reference, in store order.
    pub fn manual(&self) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|reminder| reminder.is_manual())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|reminder| reminder.id == id)
    }

    pub fn list(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ReminderStore;
    use crate::id::SequentialIdGenerator;

    #[test]
    fn manual_ids_skip_seeded_sample_ids() {
        let mut store = ReminderStore::with_defaults(Box::new(SequentialIdGenerator::new()));
        let reminder = store.add_manual("09:00", "drink water").expect("valid reminder");
        assert_eq!(reminder.id, "4");
        assert_eq!(store.list()[0].id, "4");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn add_manual_keeps_whitespace_content() {
        let mut store = ReminderStore::new(Box::new(SequentialIdGenerator::new()));
        let reminder = store.add_manual("08:00", "  ").expect("whitespace is present");
        assert_eq!(reminder.content, "  ");
        assert_eq!(store.list()[0], reminder);
    }
}
