use drills::harness::{run_by_name, HarnessError};

#[test]
fn find_lucky_examples() {
    assert_eq!(run_by_name("find-lucky", "4\n2 2 3 4\n").unwrap(), "2\n");
    assert_eq!(run_by_name("find-lucky", "6\n1 2 2 3 3 3\n").unwrap(), "3\n");
    assert_eq!(run_by_name("find-lucky", "1\n5\n").unwrap(), "-1\n");
}

#[test]
fn find_lucky_accepts_single_line_input() {
    assert_eq!(run_by_name("find-lucky", "4 2 2 3 4").unwrap(), "2\n");
}

#[test]
fn common_prefix_examples() {
    assert_eq!(
        run_by_name("common-prefix", "\"flower\",\"flow\",\"flight\"\n").unwrap(),
        "\"fl\"\n"
    );
    assert_eq!(
        run_by_name("common-prefix", "\"dog\",\"racecar\",\"car\"\n").unwrap(),
        "\"\"\n"
    );
    assert_eq!(run_by_name("common-prefix", "\n").unwrap(), "\"\"\n");
    assert_eq!(run_by_name("common-prefix", "\"same\",\"same\"\n").unwrap(), "\"same\"\n");
}

#[test]
fn letter_combination_cases() {
    assert_eq!(
        run_by_name("letter-combinations", "1\n23\n").unwrap(),
        "[\"ad\",\"ae\",\"af\",\"bd\",\"be\",\"bf\",\"cd\",\"ce\",\"cf\"]\n"
    );
    // A blank case line is the empty digit string: zero combinations.
    assert_eq!(
        run_by_name("letter-combinations", "2\n2\n\n").unwrap(),
        "[\"a\",\"b\",\"c\"]\n[]\n"
    );
}

#[test]
fn malformed_input_is_an_error_not_a_panic() {
    assert!(matches!(
        run_by_name("find-lucky", "3 1 2"),
        Err(HarnessError::MissingInput(_))
    ));
    assert!(matches!(
        run_by_name("common-prefix", "\"flower\n"),
        Err(HarnessError::UnterminatedQuote)
    ));
    assert!(matches!(
        run_by_name("letter-combinations", "1\n01\n"),
        Err(HarnessError::Keypad(_))
    ));
    assert!(matches!(
        run_by_name("letter-combinations", "2\n23\n"),
        Err(HarnessError::MissingInput(_))
    ));
}

#[test]
fn unknown_exercise_name() {
    assert!(matches!(
        run_by_name("shortest-path", ""),
        Err(HarnessError::UnknownDrill(_))
    ));
}
