//! In-progress daily plan for the selected goal.
//!
//! # Invariants
//! - Items keep insertion order; that order drives display and reminder
//!   generation.
//! - Item ids are unique within the builder.
//! - Items are never partially filled.

use crate::error::{require_present, ValidationError};
use crate::id::{fresh_id, BoxedIdGenerator};
use crate::model::plan::PlanItem;

pub struct PlanBuilder {
    items: Vec<PlanItem>,
    ids: BoxedIdGenerator,
}

impl PlanBuilder {
    pub fn new(ids: BoxedIdGenerator) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Appends a timed item.
    ///
    /// # Errors
    /// - `ValidationError` when any of `title`, `content`, `time` is empty.
    ///   Values are stored exactly as entered.
    pub fn add_item(
        &mut self,
        title: &str,
        content: &str,
        time: &str,
    ) -> Result<PlanItem, ValidationError> {
        let title = require_present("title", title)?;
        let content = require_present("content", content)?;
        let time = require_present("time", time)?;

        let items = &self.items;
        let id = fresh_id(self.ids.as_mut(), |candidate| {
            items.iter().any(|item| item.id == candidate)
        });
        let item = PlanItem {
            id,
            title: title.to_string(),
            content: content.to_string(),
            time: time.to_string(),
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes an item by id. Missing ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> Option<PlanItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PlanBuilder;
    use crate::error::ValidationError;
    use crate::id::SequentialIdGenerator;

    fn builder() -> PlanBuilder {
        PlanBuilder::new(Box::new(SequentialIdGenerator::new()))
    }

    #[test]
    fn add_item_rejects_each_empty_field() {
        let mut plan = builder();
        assert_eq!(
            plan.add_item("", "c", "07:00").unwrap_err(),
            ValidationError { field: "title" }
        );
        assert_eq!(
            plan.add_item("t", "", "07:00").unwrap_err(),
            ValidationError { field: "content" }
        );
        assert_eq!(
            plan.add_item("t", "c", "").unwrap_err(),
            ValidationError { field: "time" }
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn add_item_keeps_whitespace_as_entered() {
        let mut plan = builder();
        let blank_title = plan.add_item(" ", "c", "07:00").expect("whitespace is present");
        assert_eq!(blank_title.title, " ");

        let padded = plan.add_item(" Run ", "c", "07:00").expect("valid item");
        assert_eq!(padded.title, " Run ");
        assert_eq!(padded.reminder_text(), " Run : c");
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn remove_missing_item_is_noop() {
        let mut plan = builder();
        plan.add_item("Run", "5km jog", "07:00").unwrap();
        assert!(plan.remove_item("missing").is_none());
        assert_eq!(plan.len(), 1);
    }
}
