//! Every built-in rule reports as many args as its code declares.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rulebook::prelude::*;

fn failure(validator: BoxValidator) -> RuleError {
    let err = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(validator.validate(&Context::new()))
        .unwrap_err();
    err.as_rule().cloned().unwrap()
}

fn assert_declared_arity(err: &RuleError, expected: &RuleCode) {
    assert_eq!(err.code(), expected);
    let spec = codes::lookup(err.code()).unwrap();
    assert_eq!(err.args().len(), spec.arity, "{}", spec.template_key);
}

fn labels(n: usize) -> BTreeMap<String, i32> {
    (0..n).map(|i| (format!("k{i}"), 0)).collect()
}

#[rstest]
#[case(bind(None::<String>, option::<String>().required()), codes::PTR_REQUIRED)]
#[case(bind(String::new(), string().required()), codes::STRING_REQUIRED)]
#[case(bind("ab", string().min(3)), codes::STRING_MIN)]
#[case(bind("abcd", string().max(3)), codes::STRING_MAX)]
#[case(bind("a b", string().matches(&patterns::ALPHA_NUMERIC)), codes::STRING_MATCH)]
#[case(bind("root", string().one_of(["admin", "user"])), codes::STRING_IN)]
#[case(bind("ROOT", string().one_of_fold(["admin", "user"])), codes::STRING_IN_FOLD)]
#[case(bind(0_i32, number::<i32>().required()), codes::NUMBER_REQUIRED)]
#[case(bind(1_i32, number::<i32>().min(2)), codes::NUMBER_MIN)]
#[case(bind(3_i32, number::<i32>().max(2)), codes::NUMBER_MAX)]
#[case(bind(4_i32, number::<i32>().one_of([1, 2])), codes::NUMBER_IN)]
#[case(bind(Vec::<i32>::new(), slice::<i32>().required()), codes::SLICE_REQUIRED)]
#[case(bind(vec![1_i32], slice::<i32>().min(2)), codes::SLICE_MIN)]
#[case(bind(vec![1_i32, 2, 3], slice::<i32>().max(2)), codes::SLICE_MAX)]
#[case(bind(labels(0), map::<BTreeMap<String, i32>>().required()), codes::MAP_REQUIRED)]
#[case(bind(labels(1), map::<BTreeMap<String, i32>>().min(2)), codes::MAP_MIN)]
#[case(bind(labels(3), map::<BTreeMap<String, i32>>().max(2)), codes::MAP_MAX)]
fn test_builtin_rule_args_match_arity(#[case] validator: BoxValidator, #[case] code: RuleCode) {
    assert_declared_arity(&failure(validator), &code);
}

#[cfg(feature = "time")]
#[rstest]
#[case(0, codes::TIME_REQUIRED)]
#[case(1, codes::TIME_MIN)]
#[case(2, codes::TIME_MAX)]
fn test_time_rule_args_match_arity(#[case] which: usize, #[case] code: RuleCode) {
    use chrono::{DateTime, TimeDelta, Utc};

    let now = Utc::now();
    let validator = match which {
        0 => bind(DateTime::<Utc>::default(), time().required()),
        1 => bind(now, time().min(now + TimeDelta::hours(1))),
        _ => bind(now, time().max(now - TimeDelta::hours(1))),
    };
    assert_declared_arity(&failure(validator), &code);
}

#[test]
fn test_every_builtin_code_is_covered() {
    let covered = [
        codes::PTR_REQUIRED,
        codes::STRING_REQUIRED,
        codes::STRING_MIN,
        codes::STRING_MAX,
        codes::STRING_MATCH,
        codes::STRING_IN,
        codes::STRING_IN_FOLD,
        codes::NUMBER_REQUIRED,
        codes::NUMBER_MIN,
        codes::NUMBER_MAX,
        codes::NUMBER_IN,
        codes::SLICE_REQUIRED,
        codes::SLICE_MIN,
        codes::SLICE_MAX,
        codes::MAP_REQUIRED,
        codes::MAP_MIN,
        codes::MAP_MAX,
        codes::TIME_REQUIRED,
        codes::TIME_MIN,
        codes::TIME_MAX,
    ];
    assert_eq!(covered.len(), codes::TABLE.len());
    for spec in codes::TABLE {
        assert!(covered.contains(&spec.code), "{} has no arity case", spec.code);
    }
}
