//! Property tests for select-all toggling.

use std::collections::BTreeSet;

use proptest::prelude::*;

use pickmenu::SelectionSet;

fn distinct_options() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{1,5}", 1..20)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: From any partial selection, select-all picks everything.
    #[test]
    fn property_select_all_from_partial_selects_everything(
        options in distinct_options(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut selection = SelectionSet::new();
        for pick in &picks {
            let option = &options[pick.index(options.len())];
            if !selection.contains(option) {
                selection.toggle(option);
            }
        }
        prop_assume!(selection.len() < options.len());

        selection.toggle_all(&options);
        prop_assert_eq!(selection.as_slice(), options.as_slice());
    }

    /// PROPERTY: Select-all twice from nothing ends with nothing.
    #[test]
    fn property_select_all_twice_clears(options in distinct_options()) {
        let mut selection = SelectionSet::new();

        selection.toggle_all(&options);
        prop_assert_eq!(selection.len(), options.len());

        selection.toggle_all(&options);
        prop_assert!(selection.is_empty());
    }
}

#[test]
fn select_all_on_abc() {
    let options = ["a", "b", "c"];
    let mut selection = SelectionSet::new();

    selection.toggle_all(&options);
    assert_eq!(selection.as_slice(), ["a", "b", "c"]);

    selection.toggle_all(&options);
    assert!(selection.is_empty());
}
