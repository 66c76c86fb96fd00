mod common;

use char_diff::{diff, diff_efficient, diff_slices, edit_runs, patch, DiffOp, Strategy};
use common::{assert_script, lcs_distance, ops};
use proptest::prelude::*;

// Small alphabets make common runs, and therefore ties, frequent.
fn text() -> impl proptest::strategy::Strategy<Value = String> {
    prop_oneof![
        "[ab]{0,12}",
        "[abc ]{0,24}",
        "[a-e\u{e9}\u{1F600}]{0,16}",
    ]
}

proptest! {
    #[test]
    fn property_strategies_return_identical_spans(old in text(), new in text()) {
        prop_assert_eq!(diff(&old, &new), diff_efficient(&old, &new));
    }

    #[test]
    fn property_scripts_round_trip_and_are_minimal(old in text(), new in text()) {
        let spans = diff_efficient(&old, &new);
        assert_script(&old, &new, &spans);
    }

    #[test]
    fn property_apply_reaches_new(old in text(), new in text()) {
        let spans = diff(&old, &new);
        prop_assert_eq!(patch::apply(&old, &spans), Ok(new.clone()));
        prop_assert_eq!(patch::apply(&new, &patch::invert(&spans)), Ok(old));
    }

    #[test]
    fn property_identity_has_no_edits(s in text()) {
        let spans = diff(&s, &s);
        prop_assert_eq!(patch::distance(&spans), 0);
        prop_assert!(spans.len() <= 1);
    }

    #[test]
    fn property_unit_counts_match_lengths(
        old in proptest::collection::vec(0u8..4, 0..20),
        new in proptest::collection::vec(0u8..4, 0..20),
    ) {
        for strategy in [Strategy::Simple, Strategy::Efficient] {
            let runs = edit_runs(&old, &new, strategy);
            let in_old: usize = runs.iter().filter(|r| r.op.in_old()).map(|r| r.len).sum();
            let in_new: usize = runs.iter().filter(|r| r.op.in_new()).map(|r| r.len).sum();
            prop_assert_eq!(in_old, old.len());
            prop_assert_eq!(in_new, new.len());
            prop_assert!(runs.iter().all(|r| r.len > 0));
        }
        let simple = diff_slices(&old, &new, Strategy::Simple);
        let efficient = diff_slices(&old, &new, Strategy::Efficient);
        prop_assert_eq!(simple, efficient);
    }
}

#[test]
fn property_oracle_agrees_on_known_distances() {
    assert_eq!(lcs_distance("", ""), 0);
    assert_eq!(lcs_distance("abc", "xyz"), 6);
    assert_eq!(lcs_distance("ABCABBA", "CBABAC"), 5);
    assert_eq!(lcs_distance("kitten", "sitting"), 5);
    assert_eq!(ops(&diff("abc", "")), vec![DiffOp::Remove]);
}
