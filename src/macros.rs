//! Variadic front ends for the assertion functions.
//!
//! Each macro borrows its operands, so values can be passed directly:
//!
//! ```
//! use softassert::{TestContext, ReportConfig, ReportFormat};
//!
//! let t = TestContext::with_config("macros", ReportConfig::new(ReportFormat::Silent));
//! let rows = vec!["a", "b"];
//! softassert::equal!(t, rows[0], "a");
//! softassert::len!(t, rows, 3, "loaded from {}", "fixture.csv");
//! assert_eq!(t.failures().len(), 1);
//! assert!(t.failures()[0].ends_with("loaded from fixture.csv"));
//! assert!(t.verify().is_err());
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __diagnostic {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::core::format_args!($($arg)+))
    };
}

/// `equal!(reporter, expected, actual [, fmt, args...])`
#[macro_export]
macro_rules! equal {
    ($reporter:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::equal(&$reporter, &$expected, &$actual, $crate::__diagnostic!())
    };
    ($reporter:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::equal(&$reporter, &$expected, &$actual, $crate::__diagnostic!($($arg)+))
    };
}

/// `not_equal!(reporter, expected, actual [, fmt, args...])`
#[macro_export]
macro_rules! not_equal {
    ($reporter:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::not_equal(&$reporter, &$expected, &$actual, $crate::__diagnostic!())
    };
    ($reporter:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::not_equal(&$reporter, &$expected, &$actual, $crate::__diagnostic!($($arg)+))
    };
}

/// `same!(reporter, expected, actual [, fmt, args...])`
#[macro_export]
macro_rules! same {
    ($reporter:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::same(&$reporter, &$expected, &$actual, $crate::__diagnostic!())
    };
    ($reporter:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::same(&$reporter, &$expected, &$actual, $crate::__diagnostic!($($arg)+))
    };
}

/// `not_same!(reporter, expected, actual [, fmt, args...])`
#[macro_export]
macro_rules! not_same {
    ($reporter:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::not_same(&$reporter, &$expected, &$actual, $crate::__diagnostic!())
    };
    ($reporter:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::not_same(&$reporter, &$expected, &$actual, $crate::__diagnostic!($($arg)+))
    };
}

/// `nil!(reporter, value [, fmt, args...])`
#[macro_export]
macro_rules! nil {
    ($reporter:expr, $value:expr $(,)?) => {
        $crate::nil(&$reporter, &$value, $crate::__diagnostic!())
    };
    ($reporter:expr, $value:expr, $($arg:tt)+) => {
        $crate::nil(&$reporter, &$value, $crate::__diagnostic!($($arg)+))
    };
}

/// `not_nil!(reporter, value [, fmt, args...])`
#[macro_export]
macro_rules! not_nil {
    ($reporter:expr, $value:expr $(,)?) => {
        $crate::not_nil(&$reporter, &$value, $crate::__diagnostic!())
    };
    ($reporter:expr, $value:expr, $($arg:tt)+) => {
        $crate::not_nil(&$reporter, &$value, $crate::__diagnostic!($($arg)+))
    };
}

/// `len!(reporter, sequence, expected_len [, fmt, args...])`
#[macro_export]
macro_rules! len {
    ($reporter:expr, $sequence:expr, $expected_len:expr $(,)?) => {
        $crate::len(&$reporter, &$sequence, $expected_len, $crate::__diagnostic!())
    };
    ($reporter:expr, $sequence:expr, $expected_len:expr, $($arg:tt)+) => {
        $crate::len(&$reporter, &$sequence, $expected_len, $crate::__diagnostic!($($arg)+))
    };
}

/// `len_map!(reporter, mapping, expected_len [, fmt, args...])`
#[macro_export]
macro_rules! len_map {
    ($reporter:expr, $mapping:expr, $expected_len:expr $(,)?) => {
        $crate::len_map(&$reporter, &$mapping, $expected_len, $crate::__diagnostic!())
    };
    ($reporter:expr, $mapping:expr, $expected_len:expr, $($arg:tt)+) => {
        $crate::len_map(&$reporter, &$mapping, $expected_len, $crate::__diagnostic!($($arg)+))
    };
}

/// `fail!(reporter, message [, fmt, args...])`
#[macro_export]
macro_rules! fail {
    ($reporter:expr, $message:expr $(,)?) => {
        $crate::fail(&$reporter, $message, $crate::__diagnostic!())
    };
    ($reporter:expr, $message:expr, $($arg:tt)+) => {
        $crate::fail(&$reporter, $message, $crate::__diagnostic!($($arg)+))
    };
}
