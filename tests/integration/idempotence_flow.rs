use std::collections::BTreeMap;

use softassert::{TestContext, len, len_map, nil, not_equal, not_nil, not_same, same};

use crate::support::quiet;

type Check<'a> = Box<dyn Fn(&TestContext) -> bool + 'a>;

fn boxed<'a>(check: impl Fn(&TestContext) -> bool + 'a) -> Check<'a> {
    Box::new(check)
}

fn run_with_fresh_context(name: &str, check: &Check<'_>) -> (bool, Vec<String>) {
    let t = quiet(name);
    let result = check(&t);
    let failures = t.failures();
    t.finish();
    (result, failures)
}

#[test]
fn every_evaluator_gives_the_same_answer_twice() {
    let first = Box::new(7);
    let second = Box::new(7);
    let rows = vec![1, 2, 3];
    let index = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
    let absent: Option<u8> = None;
    let present: Result<u8, String> = Err("bad".to_string());

    let checks: Vec<(&str, Check<'_>)> = vec![
        ("not_equal/equal_values", boxed(|t| not_equal(t, &1, &1, None))),
        ("not_equal/different_values", boxed(|t| not_equal(t, &1, &2, None))),
        ("same/distinct_boxes", boxed(|t| same(t, &first, &second, None))),
        ("same/one_box", boxed(|t| same(t, &first, &first, None))),
        ("not_same/one_box", boxed(|t| not_same(t, &first, &first, None))),
        ("not_same/distinct_boxes", boxed(|t| not_same(t, &first, &second, None))),
        ("nil/none", boxed(|t| nil(t, &absent, None))),
        ("nil/err", boxed(|t| nil(t, &present, None))),
        ("not_nil/none", boxed(|t| not_nil(t, &absent, None))),
        ("not_nil/err", boxed(|t| not_nil(t, &present, None))),
        ("len/match", boxed(|t| len(t, &rows, 3, None))),
        ("len/mismatch", boxed(|t| len(t, &rows, 7, None))),
        ("len_map/match", boxed(|t| len_map(t, &index, 3, None))),
        ("len_map/mismatch", boxed(|t| len_map(t, &index, 7, None))),
    ];

    for (name, check) in &checks {
        let (first_result, first_failures) = run_with_fresh_context(name, check);
        let (second_result, second_failures) = run_with_fresh_context(name, check);

        assert_eq!(first_result, second_result, "{name}: result changed between calls");
        assert_eq!(first_failures, second_failures, "{name}: messages changed between calls");
        assert_eq!(first_failures.is_empty(), first_result, "{name}: failure recorded iff false");
    }
}
