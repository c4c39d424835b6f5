use logica_util::ErrorKind;

#[test]
fn single_speaker_speak_is_attributed() {
    let outcome = logica::run("speaker J\nas J {\n speak \"Hello\"\n}", true);
    assert!(outcome.error.is_none());
    assert_eq!(outcome.output, vec!["[J] Hello".to_string()]);
}

#[test]
fn cross_speaker_write_violates_axiom_8() {
    let err = logica::check("speaker A\nspeaker B\nas A {\n let B.x = 1\n}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AxiomViolation);
    assert_eq!(err.axiom, Some(8));
}

#[test]
fn unbounded_while_violates_axiom_9() {
    let err = logica::check("speaker X\nas X {\n while true {\n speak \"x\"\n }\n}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AxiomViolation);
    assert_eq!(err.axiom, Some(9));
}

#[test]
fn int_and_float_arithmetic_promotes() {
    let outcome = logica::run(
        "speaker J\nas J {\n speak 10 - 3.5\n}",
        true,
    );
    assert!(outcome.error.is_none());
    assert_eq!(outcome.output, vec!["[J] 6.5".to_string()]);
}

#[test]
fn int_and_float_are_equal_by_value() {
    let outcome = logica::run(
        "speaker J\nas J {\n speak 1 == 1.0\n}",
        true,
    );
    assert!(outcome.error.is_none());
    assert_eq!(outcome.output, vec!["[J] true".to_string()]);
}

#[test]
fn sealed_variable_rejects_reassignment() {
    let err = logica::check(
        "speaker J\nas J {\n let x = 1\n seal x\n let x = 2\n}",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AxiomViolation);
    assert_eq!(err.axiom, Some(5));
}

#[test]
fn ledger_verifies_after_a_normal_run() {
    let outcome = logica::run("speaker J\nas J {\n speak \"hi\"\n}", true);
    let kernel = outcome.kernel.expect("kernel present after run");
    assert!(kernel.ledger_verify());
}

#[test]
fn consecutive_when_blocks_each_evaluate_independently() {
    let outcome = logica::run(
        "speaker J\nas J {\n when true {\n speak \"first\"\n }\n when true {\n speak \"second\"\n }\n}",
        true,
    );
    assert!(outcome.error.is_none());
    assert_eq!(
        outcome.output,
        vec!["[J] first".to_string(), "[J] second".to_string()]
    );
    let kernel = outcome.kernel.expect("kernel present after run");
    assert!(kernel.ledger_verify());
}

#[test]
fn fail_leaves_output_and_ledger_in_pre_fail_state() {
    let outcome = logica::run(
        "speaker J\nas J {\n speak \"before\"\n fail \"boom\"\n speak \"after\"\n}",
        true,
    );
    assert_eq!(outcome.output, vec!["[J] before".to_string()]);
    assert_eq!(outcome.error.unwrap().kind, ErrorKind::RuntimeError);
    let kernel = outcome.kernel.expect("kernel present even on failure");
    assert!(kernel.ledger_verify());
}
