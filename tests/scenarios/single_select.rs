//! Scenario: Pick one item
//!
//! Journey: User moves the cursor, optionally searches, and confirms.
//!
//! Success Criteria:
//! - The option under the cursor is returned
//! - An empty search result never confirms
//! - A failing custom matcher surfaces as an error

use pickmenu::{Key, MenuError, Outcome, ScriptedConsole, SingleMenu};

use crate::items;

/// SCENARIO: Down twice then confirm picks the third item
#[test]
fn scenario_down_down_confirm_returns_third_item() {
    let mut menu = SingleMenu::new("Pick", items());
    let mut console = ScriptedConsole::new([Key::Down, Key::Down]);

    console.push_key(Key::Confirm);
    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(menu.state().selected(), 2);
    assert_eq!(outcome, Outcome::Selected("item3".to_string()));
    assert_eq!(console.frames().len(), 3);
}

/// SCENARIO: User searches, picks from the narrowed list
#[test]
fn scenario_search_then_confirm() {
    let mut menu = SingleMenu::new("Pick", ["alpha", "beta", "Alphabet", "gamma"]);
    let mut console = ScriptedConsole::new([Key::Search, Key::Down, Key::Confirm])
        .with_queries(["ALPHA"]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(outcome, Outcome::Selected("Alphabet"));
    assert_eq!(console.prompts(), ["Search"]);
}

/// SCENARIO: Nothing matches, confirm does nothing until the search is reset
#[test]
fn scenario_empty_search_blocks_confirm() {
    let mut menu = SingleMenu::new("Pick", items());
    let mut console = ScriptedConsole::new([
        Key::Search,
        Key::Confirm,
        Key::Confirm,
        Key::Search,
        Key::Confirm,
    ])
    .with_queries(["zzz", ""]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(outcome, Outcome::Selected("item1".to_string()));
    // Title only while the list is empty
    assert_eq!(console.frames()[1], vec!["Pick".to_string()]);
}

/// SCENARIO: The list is longer than a page; the view follows the cursor
#[test]
fn scenario_paging_follows_cursor() {
    let options: Vec<u32> = (1..=7).collect();
    let mut menu = SingleMenu::new("Numbers", options).with_page_size(3);
    let mut console = ScriptedConsole::new([Key::Down, Key::Down, Key::Down, Key::Confirm]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(outcome, Outcome::Selected(4));
    let last = console.last_frame().unwrap();
    assert_eq!(last, ["Numbers", "-> 4", "   5", "   6"]);
}

/// SCENARIO: A custom matcher fails and the error reaches the caller
#[test]
fn scenario_matcher_failure_is_reported() {
    let mut menu = SingleMenu::new("Pick", items())
        .with_matcher(|_query, _all| Err("matcher offline".into()));
    let mut console = ScriptedConsole::new([Key::Search]).with_queries(["item"]);

    let err = menu.show(&mut console).unwrap_err();

    match err {
        MenuError::Search { query, source } => {
            assert_eq!(query, "item");
            assert_eq!(source.to_string(), "matcher offline");
        }
        other => panic!("expected search error, got {other:?}"),
    }
}

/// SCENARIO: A callback receives the choice instead of the caller
#[test]
fn scenario_callback_receives_choice() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut menu = SingleMenu::new("Pick", items())
        .with_cursor(4)
        .with_callback(move |choice| sink.borrow_mut().push(choice));
    let mut console = ScriptedConsole::new([Key::Confirm]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(outcome, Outcome::Delivered);
    assert_eq!(*seen.borrow(), vec!["item5".to_string()]);
}

/// SCENARIO: Keys pressed while nothing matches do not move the cursor
#[test]
fn scenario_hidden_keys_keep_cursor() {
    let mut menu = SingleMenu::new("Pick", items()).with_cursor(4);
    let mut console = ScriptedConsole::new([
        Key::Search,
        Key::Up,
        Key::Up,
        Key::Up,
        Key::Search,
        Key::Confirm,
    ])
    .with_queries(["zzz", ""]);

    let outcome = menu.show(&mut console).unwrap();

    assert_eq!(outcome, Outcome::Selected("item5".to_string()));
}
