pub mod equality;
pub mod identity;
pub mod nullness;
pub mod size;

use std::fmt;

use crate::domain::reporter::Reporter;

pub use equality::{equal, not_equal};
pub use identity::{Identity, not_same, same};
pub use nullness::{Nullable, nil, not_nil};
pub use size::{Countable, Mapping, len, len_map};

/// Optional caller-supplied text appended to a failure message.
///
/// Build one with `Some(format_args!(...))`, or let the crate macros do it.
pub type Diagnostic<'a> = Option<fmt::Arguments<'a>>;

/// Records `failure_message` (plus the diagnostic, if any) and returns `false`.
pub fn fail<R>(reporter: &R, failure_message: &str, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
{
    let message = match diagnostic {
        Some(args) => format!("{failure_message}\n{args}"),
        None => failure_message.to_string(),
    };
    reporter.record_failure(message);
    false
}

fn expected_actual(header: &str, expected: impl fmt::Display, actual: impl fmt::Display) -> String {
    format!("{header}: \nexpected: {expected}\nactual: {actual}")
}
