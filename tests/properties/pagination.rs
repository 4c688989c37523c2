//! Property tests for cursor movement and paging.

use proptest::prelude::*;

use pickmenu::menu::search;
use pickmenu::{Key, MenuState, ScriptedConsole};

#[derive(Debug, Clone)]
enum Step {
    Press(Key),
    Search(String),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => Just(Step::Press(Key::Up)),
        4 => Just(Step::Press(Key::Down)),
        1 => Just(Step::Press(Key::PageUp)),
        1 => Just(Step::Press(Key::PageDown)),
        1 => Just(Step::Press(Key::First)),
        1 => Just(Step::Press(Key::Last)),
        2 => "[a-c0-9]{0,2}".prop_map(Step::Search),
    ]
}

fn options() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-c0-9]{1,4}", 0..50)
}

fn run(state: &mut MenuState<String>, steps: &[Step]) -> Vec<(usize, usize, usize)> {
    let queries: Vec<String> = steps
        .iter()
        .filter_map(|step| match step {
            Step::Search(query) => Some(query.clone()),
            Step::Press(_) => None,
        })
        .collect();
    let mut console = ScriptedConsole::default().with_queries(queries);

    let mut trace = Vec::new();
    for step in steps {
        let key = match step {
            Step::Press(key) => *key,
            Step::Search(_) => Key::Search,
        };
        state
            .handle_key(key, &mut console, |query, all| {
                search::filter(query, all, None, String::clone)
            })
            .unwrap();
        trace.push((state.selected(), state.page(), state.options().len()));
    }
    trace
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The cursor stays on a visible option whenever there is one.
    #[test]
    fn property_cursor_stays_in_bounds(
        all in options(),
        cursor in 0usize..60,
        page_size in 1usize..20,
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut state = MenuState::new(all, cursor, page_size);
        for (selected, _page, len) in run(&mut state, &steps) {
            if len > 0 {
                prop_assert!(selected < len, "selected {selected} out of {len}");
            }
        }
    }

    /// PROPERTY: The page is always the one holding the cursor.
    #[test]
    fn property_page_derived_from_cursor(
        all in options(),
        page_size in 1usize..20,
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut state = MenuState::new(all, 0, page_size);
        for (selected, page, len) in run(&mut state, &steps) {
            prop_assert_eq!(page, selected / page_size);
            if len > 0 {
                prop_assert!(state_range_contains(page, page_size, len, selected));
            }
        }
    }

    /// PROPERTY: The rendered page never runs past the option list.
    #[test]
    fn property_page_range_within_options(
        all in options(),
        page_size in 1usize..20,
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut state = MenuState::new(all, 0, page_size);
        run(&mut state, &steps);
        let range = state.page_range();
        prop_assert!(range.end <= state.options().len());
        prop_assert!(range.len() <= page_size);
        if !state.is_empty() {
            prop_assert!(range.contains(&state.selected()));
        }
    }
}

fn state_range_contains(page: usize, page_size: usize, len: usize, selected: usize) -> bool {
    let start = page * page_size;
    let end = (start + page_size).min(len);
    (start..end).contains(&selected)
}
