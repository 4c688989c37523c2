//! Scenario: Pick several items
//!
//! Journey: User toggles items on and off, maybe all at once, then confirms.
//!
//! Success Criteria:
//! - Confirm returns the picks in the order they were toggled on
//! - Select-all toggles between everything and nothing
//! - Marks show which rows are picked

use pickmenu::{Key, Marks, MultiMenu, Outcome, ScriptedConsole};

use crate::items;

/// SCENARIO: Select the first two items and confirm
#[test]
fn scenario_select_two_then_confirm() {
    let mut menu = MultiMenu::new("Pick", items());
    let mut console = ScriptedConsole::new([Key::Select, Key::Down, Key::Select, Key::Confirm]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(
        outcome,
        Outcome::Selected(vec!["item1".to_string(), "item2".to_string()])
    );
}

/// SCENARIO: Picks come back in toggle order, not list order
#[test]
fn scenario_toggle_order_is_kept() {
    let mut menu = MultiMenu::new("Pick", items());
    let mut console = ScriptedConsole::new([
        Key::Last,
        Key::Select,
        Key::First,
        Key::Select,
        Key::Down,
        Key::Select,
        Key::Select,
        Key::Confirm,
    ]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(
        outcome,
        Outcome::Selected(vec!["item5".to_string(), "item1".to_string()])
    );
}

/// SCENARIO: Select all, then clear all
#[test]
fn scenario_select_all_round_trip() {
    let mut menu = MultiMenu::new("Pick", ["a", "b", "c"]);
    let mut console = ScriptedConsole::new([Key::SelectAll, Key::Confirm]);
    assert_eq!(
        menu.show(&mut console).unwrap(),
        Outcome::Selected(vec!["a", "b", "c"])
    );

    let mut menu = MultiMenu::new("Pick", ["a", "b", "c"]);
    let mut console = ScriptedConsole::new([Key::SelectAll, Key::SelectAll, Key::Confirm]);
    assert_eq!(menu.show(&mut console).unwrap(), Outcome::Selected(vec![]));
}

/// SCENARIO: Confirming with nothing picked returns an empty list
#[test]
fn scenario_confirm_with_no_picks() {
    let mut menu = MultiMenu::new("Pick", items());
    let mut console = ScriptedConsole::new([Key::Down, Key::Confirm]);

    assert_eq!(menu.show(&mut console).unwrap(), Outcome::Selected(Vec::new()));
}

/// SCENARIO: Custom marks show picked rows
#[test]
fn scenario_custom_marks_render() {
    let marks = Marks {
        open: "(".to_string(),
        close: ")".to_string(),
        selected: "x".to_string(),
        unselected: "-".to_string(),
    };
    let mut menu = MultiMenu::new("Toppings", ["nuts", "honey"]).with_marks(marks);
    let mut console = ScriptedConsole::new([Key::Select, Key::Cancel]);

    menu.show(&mut console).unwrap();

    assert_eq!(
        console.frames()[1],
        vec!["Toppings", "-> (x) nuts", "   (-) honey"]
    );
}

/// SCENARIO: Confirm while nothing matches is refused; cancel still works
#[test]
fn scenario_confirm_refused_on_empty_search() {
    let mut menu = MultiMenu::new("Pick", ["item1", "item2", "item3"]);
    let mut console = ScriptedConsole::new([Key::Select, Key::Search, Key::Confirm, Key::Cancel])
        .with_queries(["zzz"]);

    assert_eq!(menu.show(&mut console).unwrap(), Outcome::Cancelled);
}
