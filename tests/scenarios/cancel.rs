//! Scenario: Back out without choosing
//!
//! Journey: User presses cancel at some point in any kind of menu.
//!
//! Success Criteria:
//! - Cancel is distinct from every real option, including ""
//! - Cancel works on an empty or fully filtered list
//! - A cancelled sub-menu hands control back to its parent

use std::cell::RefCell;
use std::rc::Rc;

use pickmenu::{CompositeMenu, Entry, Key, MultiMenu, Outcome, ScriptedConsole, SingleMenu};

/// SCENARIO: Cancel on an empty-string option is not a selection of ""
#[test]
fn scenario_cancel_differs_from_empty_string_option() {
    let mut menu = SingleMenu::new("Pick", ["", "x"]);

    let mut console = ScriptedConsole::new([Key::Cancel]);
    let cancelled = menu.show(&mut console).unwrap();

    let mut console = ScriptedConsole::new([Key::Confirm]);
    let confirmed = menu.show(&mut console).unwrap();

    assert!(cancelled.is_cancelled());
    assert_eq!(confirmed, Outcome::Selected(""));
    assert_ne!(cancelled, confirmed);
}

/// SCENARIO: Cancel after picking discards the picks
#[test]
fn scenario_multi_cancel_discards_picks() {
    let mut menu = MultiMenu::new("Pick", ["a", "b"]);
    let mut console = ScriptedConsole::new([Key::Select, Key::Down, Key::Select, Key::Cancel]);

    assert_eq!(menu.show(&mut console).unwrap(), Outcome::Cancelled);
}

/// SCENARIO: Cancel while nothing matches the search
#[test]
fn scenario_cancel_on_filtered_out_list() {
    let mut menu = SingleMenu::new("Pick", ["a", "b"]);
    let mut console =
        ScriptedConsole::new([Key::Search, Key::Confirm, Key::Cancel]).with_queries(["zzz"]);

    assert_eq!(menu.show(&mut console).unwrap(), Outcome::Cancelled);
}

/// SCENARIO: Cancel on a menu with no options at all
#[test]
fn scenario_cancel_on_empty_menu() {
    let mut menu = SingleMenu::<String>::new("Nothing", Vec::new());
    let mut console = ScriptedConsole::new([Key::Confirm, Key::Down, Key::Cancel]);

    assert_eq!(menu.show(&mut console).unwrap(), Outcome::Cancelled);
    assert_eq!(console.frames().len(), 3);
}

/// SCENARIO: Cancelling a sub-menu returns to the parent, which keeps running
#[test]
fn scenario_cancelled_child_returns_to_parent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let child_log = Rc::clone(&log);
    let action_log = Rc::clone(&log);
    let child = SingleMenu::new("Child", ["a"])
        .with_callback(move |choice| child_log.borrow_mut().push(choice.to_string()));
    let mut menu = CompositeMenu::new(
        "Main",
        [
            Entry::menu(child),
            Entry::action("Ping", move || action_log.borrow_mut().push("ping".to_string())),
        ],
    );
    let mut console =
        ScriptedConsole::new([Key::Confirm, Key::Cancel, Key::Down, Key::Confirm, Key::Cancel]);

    menu.show(&mut console).unwrap();

    assert_eq!(*log.borrow(), vec!["ping".to_string()]);
    assert_eq!(console.remaining_keys(), 0);
}
