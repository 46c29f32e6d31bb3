//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `healthplan_core` linkage without any UI runtime.
//! - Run one deterministic save flow and print the derived records.

use healthplan_core::{HealthService, IdSource, SessionConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("healthplan_core ping={}", healthplan_core::ping());
    println!("healthplan_core version={}", healthplan_core::core_version());

    let mut service = HealthService::from_config(&SessionConfig {
        seed_default_goals: true,
        seed_default_reminders: false,
        id_source: IdSource::Sequential,
    });
    let goal = service
        .select_goal("weight_loss")
        .cloned()
        .ok_or("preset goal `weight_loss` missing")?;
    service.add_plan_item("Run", "5km jog", "07:00")?;
    service.add_plan_item("Meal", "Salad", "12:30")?;

    let plan = service.save_daily_plan(chrono::Local::now().date_naive())?;
    println!(
        "plan id={} goal={} date={} items={}",
        plan.id,
        goal.name,
        plan.date,
        plan.items.len()
    );
    for reminder in service.reminders_for_plan(&plan.id) {
        println!(
            "reminder id={} time={} color={} content={}",
            reminder.id,
            reminder.time,
            reminder.color.as_str(),
            reminder.content
        );
    }
    Ok(())
}
