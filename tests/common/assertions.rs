//! Domain-specific assertion macros for formtpl harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! lookup invariant was violated.

/// Assert that an outcome names a specific template.
///
/// ```rust
/// assert_matched!(outcome, "Проба");
/// ```
#[macro_export]
macro_rules! assert_matched {
    ($outcome:expr, $name:expr) => {{
        let outcome: &formtpl_core::MatchOutcome = &$outcome;
        let expected: &str = $name;
        match outcome {
            formtpl_core::MatchOutcome::Matched(actual) if actual == expected => {}
            other => panic!(
                "assert_matched! failed:\n  expected template: {:?}\n  actual outcome:    {:?}",
                expected, other
            ),
        }
    }};
}

/// Assert that no template matched and the reported type map equals the
/// given `(name, type)` pairs, in order.
///
/// ```rust
/// assert_unmatched!(outcome, [("tumba", FieldType::Date)]);
/// ```
#[macro_export]
macro_rules! assert_unmatched {
    ($outcome:expr, [$(($name:expr, $ty:expr)),* $(,)?]) => {{
        let outcome: &formtpl_core::MatchOutcome = &$outcome;
        let expected: Vec<(String, formtpl_core::FieldType)> =
            vec![$(($name.to_string(), $ty)),*];
        match outcome {
            formtpl_core::MatchOutcome::Unmatched(actual) => {
                pretty_assertions::assert_eq!(actual, &expected)
            }
            other => panic!(
                "assert_unmatched! failed: expected no match, got {:?}",
                other
            ),
        }
    }};
}

/// Assert that every value in a corpus is detected as `ty`.
#[macro_export]
macro_rules! assert_all_detected_as {
    ($corpus:expr, $ty:expr) => {{
        let expected: formtpl_core::FieldType = $ty;
        for value in $corpus.iter() {
            let actual = formtpl_core::detect(value);
            if actual != expected {
                panic!(
                    "assert_all_detected_as! failed for {:?}:\n  expected: {}\n  actual:   {}",
                    value, expected, actual
                );
            }
        }
    }};
}

/// Assert that no value in a corpus is detected as `ty`.
#[macro_export]
macro_rules! assert_none_detected_as {
    ($corpus:expr, $ty:expr) => {{
        let rejected: formtpl_core::FieldType = $ty;
        for value in $corpus.iter() {
            if formtpl_core::detect(value) == rejected {
                panic!(
                    "assert_none_detected_as! failed: {:?} was detected as {}",
                    value, rejected
                );
            }
        }
    }};
}
