use std::rc::Rc;

use predicates::prelude::*;
use softassert::{equal, not_same, same};

use crate::support::quiet;

#[derive(Debug, PartialEq)]
struct Input {
    field: i32,
}

#[test]
fn content_equal_allocations_are_equal_but_not_same() {
    let t = quiet("distinct_allocations");
    let a = Box::new(Input { field: 1 });
    let b = Box::new(Input { field: 1 });

    assert!(equal(&t, &a, &b, None));
    assert!(!same(&t, &a, &b, None));
    assert!(not_same(&t, &a, &b, None));

    let failures = t.failures();
    assert_eq!(failures.len(), 1);
    assert!(predicate::str::starts_with("Not same: ").eval(failures[0].as_str()));
    t.finish();
}

#[test]
fn shared_allocation_is_same() {
    let t = quiet("shared_allocation");
    let p = Rc::new(3);
    let q = Rc::clone(&p);

    assert!(softassert::same!(t, p, q));
    assert!(!softassert::not_same!(t, p, q, "clone of {}", "p"));

    let failures = t.failures();
    assert_eq!(failures.len(), 1);
    assert!(predicate::str::starts_with("Same: ").eval(failures[0].as_str()));
    assert!(predicate::str::contains(" 3\nactual: ").eval(failures[0].as_str()));
    assert!(predicate::str::ends_with("\nclone of p").eval(failures[0].as_str()));
    t.finish();
}

#[test]
fn references_to_one_value_are_same() {
    let t = quiet("references");
    let value = Input { field: 3 };
    let other = Input { field: 3 };
    let first = &value;
    let second = &value;

    assert!(same(&t, &first, &second, None));
    assert!(not_same(&t, &first, &&other, None));
    assert!(!t.failed());
}

#[test]
fn scalars_compare_by_value() {
    let t = quiet("scalars");
    assert!(same(&t, &1, &1, None));
    assert!(!same(&t, &1, &0, None));
    assert!(!not_same(&t, &1, &1, None));
    assert!(not_same(&t, &1, &0, None));
    assert_eq!(t.finish().failure_count, 2);
}
