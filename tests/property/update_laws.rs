//! Property-based tests for textual casting and put/get

use dotcfg::cast::cast;
use dotcfg::{ConfigStore, ConfigValue};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_integer_literals_cast_to_integers() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<i64>(), |n| {
            prop_assert_eq!(cast(&n.to_string()), ConfigValue::Integer(n));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_float_literals_cast_to_floats() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(-1.0e9f64..1.0e9), |f| {
            prop_assert_eq!(cast(&format!("{:?}", f)), ConfigValue::Float(f));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_plain_words_stay_text() {
    let mut runner = proptest::test_runner::TestRunner::default();

    // A leading `x` keeps words clear of `inf`, `nan` and the boolean literals.
    runner
        .run(&"x[a-zA-Z_/-]{0,10}", |word| {
            prop_assert_eq!(cast(&word), ConfigValue::Text(word.clone()));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_boolean_casing() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[tT][rR][uU][eE]", "[fF][aA][lL][sS][eE]"), |(yes, no)| {
            prop_assert_eq!(cast(&yes), ConfigValue::Bool(true));
            prop_assert_eq!(cast(&no), ConfigValue::Bool(false));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_put_then_get_round_trip() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-z]{1,6}", any::<i64>()), |(key, n)| {
            let mut store = ConfigStore::new();
            let defaults = json!({
                key.clone(): "value",
                "section": { key.clone(): false },
            });
            store.initialize_with(defaults, None).unwrap();

            store.put_str(&format!("section.{}={}", key, n)).unwrap();
            prop_assert_eq!(store.get(&format!("section.{}", key)).unwrap().as_i64(), Some(n));

            store.put_value(&key, n).unwrap();
            prop_assert_eq!(store.get(&key).unwrap().as_i64(), Some(n));
            Ok(())
        })
        .unwrap();
}
