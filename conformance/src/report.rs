//! Check outcomes and their aggregation into a run report.
//!
//! Validators emit one [`CheckResult`] per rule they evaluate; a [`Report`]
//! collects them across validators. Warnings never block conformance, only
//! [`Severity::Failure`] does.

/// Outcome class of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The rule is satisfied.
    Pass,
    /// Suspicious but tolerated.
    Warning,
    /// The rule is violated; the dictionary does not conform.
    Failure,
}

impl Severity {
    /// Four-letter tag used when rendering a report line.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// Outcome of a single conformance check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Which validator produced the outcome.
    pub validator: String,
    /// What was checked, and what was found.
    pub message: String,
    /// Outcome class.
    pub severity: Severity,
}

impl CheckResult {
    /// Builds a result with an explicit severity.
    pub fn new(
        severity: Severity,
        validator: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
        }
    }

    /// Shorthand for a [`Severity::Pass`] result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Pass, validator, message)
    }

    /// Shorthand for a [`Severity::Warning`] result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, validator, message)
    }

    /// Shorthand for a [`Severity::Failure`] result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Failure, validator, message)
    }

    /// Returns true for [`Severity::Failure`] results.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    /// Returns true for [`Severity::Warning`] results.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Every check outcome of one conformance run, in the order produced.
#[derive(Debug, Default)]
pub struct Report {
    /// Individual outcomes, grouped by validator.
    pub results: Vec<CheckResult>,
}

impl Report {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one outcome.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Absorbs the outcomes of another report, preserving order.
    pub fn extend(&mut self, other: Report) {
        self.results.extend(other.results);
    }

    /// Number of outcomes with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// True when no check failed. Warnings do not block.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
