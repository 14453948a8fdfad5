//! Integration coverage adapted from the original `cspsh` interpreter's own
//! regression corpus: a transcription of Hoare's CSP monograph, chapter 1,
//! annotated inline with expected repair hints for the sentences that don't
//! knit (SPEC_FULL.md §8). This is a representative sample, not a verbatim
//! copy: each case below is re-derived from the corpus's intent rather than
//! pasted wholesale.

use cspsh::error::CspError;

fn format_ok(text: &str) -> String {
    let (_ast, formatted) = cspsh::parse_and_format(text).unwrap_or_else(|err| {
        panic!("expected {text:?} to knit and validate, got: {}", err.citation)
    });
    formatted
}

fn hint_for(text: &str) -> String {
    cspsh::parse_and_format(text)
        .expect_err("expected a repair hint")
        .error
        .hint()
}

#[test]
fn section_1_1_introduction_sets_and_process_names_round_trip() {
    assert_eq!(format_ok("{coin, choc, in2p, out1p}"), "{coin, choc, in2p, out1p}");
    assert_eq!(format_ok("VMS"), "VMS");
    assert_eq!(format_ok("A = B = C = {x, y, z}"), "A = B = C = {x, y, z}");
    assert_eq!(format_ok("αVMS = {coin, choc}"), "αVMS = {coin, choc}");
}

#[test]
fn section_1_1_1_prefix_examples_round_trip() {
    assert_eq!(format_ok("(x → P)"), "(x → P)");
    assert_eq!(format_ok("coin → STOP"), "coin → STOP");
    assert_eq!(
        format_ok("(coin → (choc → (coin → (choc → STOP))))"),
        "(coin → (choc → (coin → (choc → STOP))))"
    );
    assert_eq!(
        format_ok("CTR = (right → up → right → right → STOP)"),
        "CTR = (right → up → right → right → STOP)"
    );
}

#[test]
fn section_1_1_1_short_prefixes_need_more_source_to_knit() {
    // "P → Q" and "x → y" both match a bare name as a complete top-level
    // sentence, leaving the arrow and its target unconsumed.
    assert_eq!(hint_for("P → Q"), "need more source to knit");
    assert_eq!(hint_for("x → y"), "need more source to knit");
}

#[test]
fn section_1_1_2_recursion_examples_round_trip() {
    assert_eq!(format_ok("CLOCK = (tick → CLOCK)"), "CLOCK = (tick → CLOCK)");
    assert_eq!(
        format_ok("CLOCK = μ X : {tick} • (tick → X)"),
        "CLOCK = μ X : {tick} • (tick → X)"
    );
    assert_eq!(format_ok("VMS = (coin → (choc → VMS))"), "VMS = (coin → (choc → VMS))");
    assert_eq!(
        format_ok("VMS = μ X : {coin, choc} • (coin → (choc → X))"),
        "VMS = μ X : {coin, choc} • (coin → (choc → X))"
    );
}

#[test]
fn section_1_1_3_choice_examples_round_trip() {
    assert_eq!(format_ok("(x → P | y → Q)"), "(x → P | y → Q)");
    assert_eq!(
        format_ok("(up → STOP | right → right → up → STOP)"),
        "(up → STOP | right → right → up → STOP)"
    );
    assert_eq!(
        format_ok("VMCT = μ X • (coin → (choc → X | toffee → X))"),
        "VMCT = μ X • (coin → (choc → X | toffee → X))"
    );
    assert_eq!(
        format_ok("COPYBIT = μ X • (in.0 → out.0 → X | in.1 → out.1 → X)"),
        "COPYBIT = μ X • (in.0 → out.0 → X | in.1 → out.1 → X)"
    );
    assert_eq!(format_ok("(x → P | y → Q | z → R)"), "(x → P | y → Q | z → R)");
}

#[test]
fn section_1_1_3_choice_boundary_failures() {
    assert_eq!(hint_for("P | Q"), "need more source to knit");
    assert_eq!(hint_for("(x → P | x → Q)"), "need distinct guard names, got: x x");
    assert_eq!(hint_for("(x → P | (y → Q | z → R))"), "need a stronger knitter");
    assert_eq!(hint_for("(x → P | y)"), "need a stronger knitter");
    assert_eq!(hint_for("(x → P) | (y → Q)"), "need more source to knit");
    assert_eq!(
        hint_for("(x:A → P | x:B → Q)"),
        "need distinct guard names, got: x x"
    );
}

#[test]
fn section_1_1_3_typed_guards_are_checked_by_event_name_not_world() {
    assert_eq!(
        format_ok("(x:A → P | y:B → Q)"),
        "(x:A → P | y:B → Q)"
    );
}

#[test]
fn section_1_1_3_indexed_family_member_round_trips() {
    assert_eq!(format_ok("RUN*A = (x:A → RUN*A)"), "RUN*A = (x:A → RUN*A)");
    assert_eq!(format_ok("x:A → RUN*A"), "x:A → RUN*A");
}

#[test]
fn section_1_1_3_argot_step_world_variants_round_trip() {
    assert_eq!(format_ok("x:αP"), "x:αP");
    assert_eq!(format_ok("(x:B → P(x))"), "(x:B → P(x))");
    assert_eq!(
        format_ok("(a → P | b → Q) = (x:B → R(x))"),
        "(a → P | b → Q) = (x:B → R(x))"
    );
}

#[test]
fn section_1_1_4_mutual_recursion_round_trips() {
    assert_eq!(
        format_ok("αDD = αO = αL = {setorange, setlemon, orange, lemon}"),
        "αDD = αO = αL = {setorange, setlemon, orange, lemon}"
    );
    assert_eq!(
        format_ok("DD = (setorange → O | setlemon → L)"),
        "DD = (setorange → O | setlemon → L)"
    );
    assert_eq!(
        format_ok("CT0 = (up → CT1 | around → CT0)"),
        "CT0 = (up → CT1 | around → CT0)"
    );
}

#[test]
fn section_1_5_traces_round_trip() {
    assert_eq!(format_ok("⟨coin, choc, coin, choc⟩"), "⟨coin, choc, coin, choc⟩");
    assert_eq!(format_ok("⟨⟩"), "⟨⟩");
    assert_eq!(format_ok("⟨in2p, large⟩"), "⟨in2p, large⟩");
    assert_eq!(format_ok("⟨in1p, in1p, in1p, x⟩"), "⟨in1p, in1p, in1p, x⟩");
}

#[test]
fn channel_five_choice_spans_multiple_source_lines() {
    // 1.1.3 X2: CSP sentences are not line-delimited, a fork's prongs may
    // be split across lines, matching the pipeline's whole-text parse.
    let text = "CH5C = in5p → (\n    out1p → out1p → out1p → out2p → CH5C\n    | out2p → out1p → out2p → CH5A\n)";
    let (_ast, formatted) = cspsh::parse_and_format(text).unwrap();
    assert_eq!(
        formatted,
        "CH5C = in5p → (out1p → out1p → out1p → out2p → CH5C | out2p → out1p → out2p → CH5A)"
    );
}

#[test]
fn line_ending_comments_are_stripped_before_parsing() {
    assert_eq!(
        format_ok("coin → STOP  # 1.1.1 X1"),
        "coin → STOP"
    );
}

#[test]
fn empty_source_needs_some_source() {
    let err = cspsh::parse_and_format("").unwrap_err();
    assert_eq!(err.error, CspError::NeedSomeSource);
    assert_eq!(err.citation, "error: need some source");
}
