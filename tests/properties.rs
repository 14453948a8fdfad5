//! Boundary-behaviour and property-based coverage (spec.md §8), using
//! `rstest` parameterized cases and `proptest` generators.

use cspsh::error::CspError;
use cspsh::{format_csp, parse_and_format};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Boundary Behaviours (rstest)
// =============================================================================

#[rstest]
#[case::empty_input("", "need some source")]
#[case::short_prefix_leaves_the_arrow_unconsumed("x → y", "need more source to knit")]
#[case::nested_fork_in_a_guard_position("(x → P | (y → Q | z → R))", "need a stronger knitter")]
#[case::bare_name_guard_is_not_a_prong("(x → P | y)", "need a stronger knitter")]
#[case::duplicate_event_set_member("{a, a}", "need distinct event names, got: a a")]
#[case::duplicate_fork_guard("(x → P | x → Q)", "need distinct guard names, got: x x")]
#[case::duplicate_typed_fork_guard("(x:A → P | x:B → Q)", "need distinct guard names, got: x x")]
fn boundary_behaviours_raise_the_expected_hint(#[case] input: &str, #[case] hint: &str) {
    let err = parse_and_format(input).expect_err("expected a repair hint");
    assert_eq!(err.error.hint(), hint);
}

#[rstest]
#[case::bare_prefix("tick → STOP")]
#[case::pocketed_recursive_def("VMS = (coin → (choc → VMS))")]
#[case::sharp_recursion("CLOCK = μ X : {tick} • (tick → X)")]
#[case::trace("⟨coin, choc, coin, choc⟩")]
#[case::distinct_typed_fork_guards("(x:A → P | y:B → Q)")]
fn well_formed_sentences_round_trip_verbatim(#[case] input: &str) {
    let (_ast, formatted) = parse_and_format(input).expect("expected this sentence to knit");
    assert_eq!(formatted, input);
}

// =============================================================================
// Property-Based Tests (proptest)
// =============================================================================

fn event_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}"
}

proptest! {
    /// *Round trip* (spec.md §8): a prefix chain built from arbitrary
    /// distinct-enough lowercase event names, terminated in STOP, must
    /// format back out to exactly the text the parser consumed.
    #[test]
    fn prefix_chains_round_trip(events in proptest::collection::vec(event_name(), 1..6)) {
        let text = events.iter().map(|e| format!("{e} → ")).collect::<String>() + "STOP";

        let (ast, formatted) = parse_and_format(&text)
            .unwrap_or_else(|err| panic!("expected {text:?} to knit, got: {}", err.citation));

        prop_assert_eq!(&formatted, &text);
        prop_assert_eq!(format_csp(&ast), formatted);
    }

    /// *Idempotence* (spec.md §8): reformatting already-canonical CSP
    /// text must be a no-op.
    #[test]
    fn prefix_chains_are_idempotent_under_reformatting(
        events in proptest::collection::vec(event_name(), 1..6)
    ) {
        let text = events.iter().map(|e| format!("{e} → ")).collect::<String>() + "STOP";

        let (_ast1, formatted1) = parse_and_format(&text).unwrap();
        let (_ast2, formatted2) = parse_and_format(&formatted1).unwrap();

        prop_assert_eq!(formatted1, formatted2);
    }

    /// An event set built from arbitrary *distinct* lowercase names must
    /// always validate and round-trip; duplicate-detection completeness
    /// (spec.md §8) is covered separately by the boundary-behaviour cases
    /// above.
    #[test]
    fn distinct_event_sets_always_validate(
        names in proptest::collection::hash_set(event_name(), 1..6)
    ) {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        let text = format!("{{{}}}", names.join(", "));

        let result = parse_and_format(&text);
        prop_assert!(result.is_ok(), "expected {:?} to validate, got {:?}", text, result.err());
    }
}

#[test]
fn internal_errors_are_never_raised_by_the_public_pipeline() {
    // The "fatal, never recovered" assertions (spec.md §7) are debug_assert
    // invariants that should never trip on any input reachable through the
    // public API, well-formed or not; this is a smoke test that a broad
    // sample of malformed input never panics.
    let samples = [
        "", "=", "μ", "α", "(", ")", "{", "}", "⟨", "⟩", "→", "•", ":",
        "X = μ X :", "((()))", "a → → b", "{,}", "RUN*",
    ];
    for sample in samples {
        let _ = std::panic::catch_unwind(|| parse_and_format(sample))
            .unwrap_or_else(|_| panic!("parse_and_format panicked on {sample:?}"));
    }
}

#[test]
fn need_distinct_is_the_only_repair_hint_with_a_kind_specific_message() {
    let CspError::NeedDistinct { kind, .. } = parse_and_format("{a, a}").unwrap_err().error else {
        panic!("expected NeedDistinct");
    };
    assert_eq!(kind, "event names");
}
