//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose goal, plan and reminder operations of one process-wide session.
//! - Supply the current local date when saving a plan.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All session access is serialized through one mutex.
//! - Records cross the boundary as flat string DTOs.

use healthplan_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Goal, HealthService, PlanItem, Reminder, SavedPlan, SessionConfig,
};
use log::error;
use once_cell::sync::Lazy;
use std::sync::Mutex;

static SESSION: Lazy<Mutex<HealthService>> =
    Lazy::new(|| Mutex::new(HealthService::from_config(&SessionConfig::from_env())));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Goal row for the goal grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalView {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Timed item of the draft or of a saved plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanItemView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub time: String,
}

/// Saved plan card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPlanView {
    pub id: String,
    pub goal: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub items: Vec<PlanItemView>,
}

/// Reminder row; plan fields are `None` for manual reminders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderView {
    pub id: String,
    pub plan_id: Option<String>,
    pub goal_name: Option<String>,
    pub time: String,
    pub content: String,
    /// `green|blue|orange`.
    pub color: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id of the created/selected/removed record, when there is one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Lists goals in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn goals_list() -> Vec<GoalView> {
    with_session(|session| session.goals().iter().map(to_goal_view).collect())
        .unwrap_or_default()
}

/// Adds a user-defined goal.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_add(name: String, icon: String) -> ActionResponse {
    respond(|session| {
        session
            .add_goal(&name, &icon)
            .map(|goal| ActionResponse::success("Goal added.", Some(goal.id)))
            .unwrap_or_else(|err| ActionResponse::failure(format!("goal_add failed: {err}")))
    })
}

/// Removes a goal; unknown ids succeed with `id = None`.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_remove(goal_id: String) -> ActionResponse {
    respond(|session| {
        let removed = session.remove_goal(&goal_id).map(|goal| goal.id);
        ActionResponse::success("Goal removed.", removed)
    })
}

/// Selects the active goal.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_select(goal_id: String) -> ActionResponse {
    respond(|session| match session.select_goal(&goal_id) {
        Some(goal) => ActionResponse::success("Goal selected.", Some(goal.id.clone())),
        None => ActionResponse::failure(format!("goal_select failed: unknown goal {goal_id}")),
    })
}

/// Returns the selected goal, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_selected() -> Option<GoalView> {
    with_session(|session| session.selected_goal().map(to_goal_view))
        .ok()
        .flatten()
}

/// Lists the draft plan items in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_items_list() -> Vec<PlanItemView> {
    with_session(|session| session.plan_items().iter().map(to_plan_item_view).collect())
        .unwrap_or_default()
}

/// Adds a timed item to the draft plan.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_item_add(title: String, content: String, time: String) -> ActionResponse {
    respond(|session| {
        session
            .add_plan_item(&title, &content, &time)
            .map(|item| ActionResponse::success("Plan item added.", Some(item.id)))
            .unwrap_or_else(|err| ActionResponse::failure(format!("plan_item_add failed: {err}")))
    })
}

/// Removes a draft plan item.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_item_remove(item_id: String) -> ActionResponse {
    respond(|session| {
        let removed = session.remove_plan_item(&item_id).map(|item| item.id);
        ActionResponse::success("Plan item removed.", removed)
    })
}

/// Saves the draft plan for today's local date and derives its reminders.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_save() -> ActionResponse {
    let today = chrono::Local::now().date_naive();
    respond(|session| {
        session
            .save_daily_plan(today)
            .map(|plan| ActionResponse::success("Plan saved.", Some(plan.id)))
            .unwrap_or_else(|err| ActionResponse::failure(format!("plan_save failed: {err}")))
    })
}

/// Lists saved plans, most recent first.
#[flutter_rust_bridge::frb(sync)]
pub fn saved_plans_list() -> Vec<SavedPlanView> {
    with_session(|session| session.saved_plans().iter().map(to_saved_plan_view).collect())
        .unwrap_or_default()
}

/// Deletes a saved plan. Its reminders are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn saved_plan_delete(plan_id: String) -> ActionResponse {
    respond(|session| {
        let removed = session.delete_saved_plan(&plan_id).map(|plan| plan.id);
        ActionResponse::success("Plan deleted.", removed)
    })
}

/// Lists every reminder in store order.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_list() -> Vec<ReminderView> {
    with_session(|session| session.reminders().iter().map(to_reminder_view).collect())
        .unwrap_or_default()
}

/// Lists reminders derived from one saved plan.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_for_plan(plan_id: String) -> Vec<ReminderView> {
    with_session(|session| {
        session
            .reminders_for_plan(&plan_id)
            .into_iter()
            .map(to_reminder_view)
            .collect()
    })
    .unwrap_or_default()
}

/// Lists reminders not tied to any plan.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_manual() -> Vec<ReminderView> {
    with_session(|session| {
        session
            .manual_reminders()
            .into_iter()
            .map(to_reminder_view)
            .collect()
    })
    .unwrap_or_default()
}

/// Adds a manual reminder.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_add(time: String, content: String) -> ActionResponse {
    respond(|session| {
        session
            .add_reminder(&time, &content)
            .map(|reminder| ActionResponse::success("Reminder added.", Some(reminder.id)))
            .unwrap_or_else(|err| ActionResponse::failure(format!("reminder_add failed: {err}")))
    })
}

/// Deletes one reminder.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_delete(reminder_id: String) -> ActionResponse {
    respond(|session| {
        let removed = session.delete_reminder(&reminder_id).map(|r| r.id);
        ActionResponse::success("Reminder deleted.", removed)
    })
}

fn with_session<T>(f: impl FnOnce(&mut HealthService) -> T) -> Result<T, String> {
    let mut guard = SESSION.lock().map_err(|_| {
        error!("event=session_lock module=ffi status=error error_code=poisoned");
        "session lock poisoned".to_string()
    })?;
    Ok(f(&mut guard))
}

fn respond(f: impl FnOnce(&mut HealthService) -> ActionResponse) -> ActionResponse {
    with_session(f).unwrap_or_else(|message| ActionResponse::failure(message))
}

fn to_goal_view(goal: &Goal) -> GoalView {
    GoalView {
        id: goal.id.clone(),
        name: goal.name.clone(),
        icon: goal.icon.clone(),
    }
}

fn to_plan_item_view(item: &PlanItem) -> PlanItemView {
    PlanItemView {
        id: item.id.clone(),
        title: item.title.clone(),
        content: item.content.clone(),
        time: item.time.clone(),
    }
}

fn to_saved_plan_view(plan: &SavedPlan) -> SavedPlanView {
    SavedPlanView {
        id: plan.id.clone(),
        goal: plan.goal.clone(),
        date: plan.date.clone(),
        items: plan.items.iter().map(to_plan_item_view).collect(),
    }
}

fn to_reminder_view(reminder: &Reminder) -> ReminderView {
    ReminderView {
        id: reminder.id.clone(),
        plan_id: reminder.plan_id.clone(),
        goal_name: reminder.goal_name.clone(),
        time: reminder.time.clone(),
        content: reminder.content.clone(),
        color: reminder.color.as_str().to_string(),
    }
}
