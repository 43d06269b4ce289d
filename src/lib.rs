//! Soft assertions for test suites.
//!
//! Every assertion evaluates one condition and returns `true` when it holds.
//! When it does not, a formatted message is recorded through a [`Reporter`]
//! and `false` is returned; the test keeps running.
//!
//! ```
//! use softassert::{TestContext, equal, len};
//!
//! let t = TestContext::new("example");
//! assert!(equal(&t, &1, &1, None));
//! assert!(!len(&t, &vec![1, 2, 3], 7, Some(format_args!("rows from {}", "fixture"))));
//! assert_eq!(t.failures().len(), 1);
//!
//! let failure = t.verify().expect_err("one failure recorded");
//! assert_eq!(failure.failure_count, 1);
//! ```

pub mod config;
pub mod context;
pub mod domain;
pub mod engine;
pub mod io;
mod macros;

pub use config::{ReportConfig, ReportFormat};
pub use context::TestContext;
pub use domain::error::{ConfigError, TestFailure};
pub use domain::report::{FailureRecord, TestReport};
pub use domain::reporter::Reporter;
pub use engine::r#assert::{
    Countable, Diagnostic, Identity, Mapping, Nullable, equal, fail, len, len_map, nil,
    not_equal, not_nil, not_same, same,
};
