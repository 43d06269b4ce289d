use std::collections::HashMap;

use predicates::prelude::*;
use softassert::{len, len_map};

use crate::support::quiet;

#[test]
fn sequence_length_cases() {
    let t = quiet("sequence_length");
    let values = vec![1, 2, 3];
    let absent: Option<Vec<i32>> = None;

    assert!(!len(&t, &values, 7, None));
    assert!(len(&t, &values, 3, None));
    assert!(len(&t, &absent, 0, None));

    let failures = t.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0], "\"[1, 2, 3]\" should have 7 item(s), but has 3");
    t.finish();
}

#[test]
fn mapping_length_cases() {
    let t = quiet("mapping_length");
    let mapping = HashMap::from([("foo", 1), ("bar", 2), ("baz", 3)]);
    let absent: Option<HashMap<&str, i32>> = None;

    assert!(!len_map(&t, &mapping, 7, None));
    assert!(len_map(&t, &mapping, 3, None));
    assert!(len_map(&t, &absent, 0, None));

    let failures = t.failures();
    assert_eq!(failures.len(), 1);
    assert!(predicate::str::ends_with("\" should have 7 item(s), but has 3").eval(failures[0].as_str()));
    assert!(predicate::str::contains("\"foo\": 1").eval(failures[0].as_str()));
    t.finish();
}

#[test]
fn macros_borrow_containers() {
    let t = quiet("macros");
    let rows = vec!["a", "b"];
    let index = HashMap::from([("a", 0)]);

    assert!(softassert::len!(t, rows, 2));
    assert!(softassert::len_map!(t, index, 1));
    assert!(!softassert::len_map!(t, index, 2, "index built from {} rows", rows.len()));

    // Both containers are still usable after the macros borrowed them.
    assert_eq!(rows.len(), 2);
    assert!(predicate::str::ends_with("\nindex built from 2 rows").eval(t.failures()[0].as_str()));
    t.finish();
}
