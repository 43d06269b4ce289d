use serde::{Deserialize, Serialize};

/// Single failure recorded by an assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureRecord {
    pub test: String,
    pub message: String,
}

/// Outcome of one test and its sub-tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestReport {
    pub name: String,
    pub passed: bool,
    pub failure_count: usize,
    pub failures: Vec<FailureRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtests: Vec<TestReport>,
}

impl TestReport {
    /// Total failures recorded by this test and every nested sub-test.
    pub fn total_failures(&self) -> usize {
        self.failure_count
            + self
                .subtests
                .iter()
                .map(TestReport::total_failures)
                .sum::<usize>()
    }

    /// Failures of this test followed by those of its sub-tests, depth first.
    pub fn all_failures(&self) -> Vec<&FailureRecord> {
        let mut out: Vec<&FailureRecord> = self.failures.iter().collect();
        for subtest in &self.subtests {
            out.extend(subtest.all_failures());
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
