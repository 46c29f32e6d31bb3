use healthplan_core::{GoalCatalog, SequentialIdGenerator, ValidationError};

fn catalog() -> GoalCatalog {
    GoalCatalog::with_defaults(Box::new(SequentialIdGenerator::new()))
}

#[test]
fn add_goal_appends_with_fresh_id() {
    let mut catalog = catalog();
    let before = catalog.list().len();

    let goal = catalog.add_goal("晨跑", "🏃‍♂️").unwrap();

    assert_eq!(goal.id, "preset-1");
    assert_eq!(goal.name, "晨跑");
    assert_eq!(catalog.list().len(), before + 1);
    assert_eq!(catalog.list().last(), Some(&goal));
}

#[test]
fn add_goal_trims_and_rejects_blank_fields() {
    let mut catalog = catalog();
    let before = catalog.list().len();

    let err = catalog.add_goal("   ", "🌟").unwrap_err();
    assert_eq!(err, ValidationError { field: "name" });
    let err = catalog.add_goal("Yoga", " ").unwrap_err();
    assert_eq!(err, ValidationError { field: "icon" });
    assert_eq!(catalog.list().len(), before);

    let goal = catalog.add_goal("  Yoga ", " 🧘 ").unwrap();
    assert_eq!(goal.name, "Yoga");
    assert_eq!(goal.icon, "🧘");
}

#[test]
fn select_goal_returns_goal_and_unknown_clears_selection() {
    let mut catalog = catalog();

    let selected = catalog.select_goal("hydration").cloned().unwrap();
    assert_eq!(selected.name, "补水");
    assert_eq!(catalog.selected(), Some(&selected));

    assert!(catalog.select_goal("does-not-exist").is_none());
    assert!(catalog.selected().is_none());
}

#[test]
fn removing_selected_goal_clears_selection() {
    let mut catalog = catalog();
    catalog.select_goal("weight_loss");

    let removed = catalog.remove_goal("weight_loss").unwrap();

    assert_eq!(removed.id, "weight_loss");
    assert!(catalog.selected().is_none());
    assert!(catalog.get("weight_loss").is_none());
}

#[test]
fn removing_other_goal_keeps_selection() {
    let mut catalog = catalog();
    catalog.select_goal("weight_loss");

    catalog.remove_goal("meditation");

    assert_eq!(catalog.selected().map(|goal| goal.id.as_str()), Some("weight_loss"));
}

#[test]
fn remove_unknown_goal_is_noop() {
    let mut catalog = catalog();
    let before = catalog.list().to_vec();

    assert!(catalog.remove_goal("nope").is_none());
    assert_eq!(catalog.list(), before.as_slice());
}
