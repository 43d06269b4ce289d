use std::fmt::Debug;

use crate::domain::reporter::Reporter;

use super::{Diagnostic, expected_actual, fail};

/// Asserts that two values are equal.
///
/// Equality is the type's `PartialEq`, so references, boxes and shared
/// pointers compare the values they point at rather than their addresses.
pub fn equal<R, T>(reporter: &R, expected: &T, actual: &T, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    if expected != actual {
        return fail(reporter, &not_equal_message(expected, actual), diagnostic);
    }
    true
}

/// Asserts that two values are not equal.
pub fn not_equal<R, T>(reporter: &R, expected: &T, actual: &T, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        return fail(reporter, &not_equal_message(expected, actual), diagnostic);
    }
    true
}

fn not_equal_message<T: Debug + ?Sized>(expected: &T, actual: &T) -> String {
    expected_actual(
        "Not equal",
        format_args!("{expected:?}"),
        format_args!("{actual:?}"),
    )
}
