use serde::{Deserialize, Serialize};

use crate::input::cucumber::{Feature, Scenario, StepStatus};

// ============================================================================
// Summary model — per-browser and aggregate test counts
// ============================================================================

/// Outcome of a single scenario, derived from its step statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Passed,
    Failed,
    Skipped,
}

/// Classify a scenario from its steps.
///
/// Precedence: any failed step makes the scenario FAILED; otherwise any
/// skipped or undefined step makes it SKIPPED; otherwise PASSED. A pending
/// step on its own does not demote a scenario.
pub fn classify_scenario(scenario: &Scenario) -> ScenarioOutcome {
    let mut any_failed = false;
    let mut any_skipped = false;

    for step in &scenario.steps {
        match step.status() {
            StepStatus::Failed => any_failed = true,
            StepStatus::Skipped | StepStatus::Undefined => any_skipped = true,
            StepStatus::Passed | StepStatus::Pending => {}
        }
    }

    if any_failed {
        ScenarioOutcome::Failed
    } else if any_skipped {
        ScenarioOutcome::Skipped
    } else {
        ScenarioOutcome::Passed
    }
}

/// Scenario counts and total step duration for one browser's run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BrowserSummary {
    pub browser: String,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,

    /// Sum of step durations, in nanoseconds as reported on the wire.
    pub duration_ns: u64,
}

impl BrowserSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Total duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_ns as f64 / 1_000_000_000.0
    }

    /// Duration for display, two-decimal seconds (e.g. `"2.50"`).
    pub fn duration_display(&self) -> String {
        format!("{:.2}", self.duration_secs())
    }
}

/// Walk one browser's features and produce its summary. Pure: no I/O, no
/// shared state. Zero features yields an all-zero summary.
pub fn summarize(browser: &str, features: &[Feature]) -> BrowserSummary {
    let mut summary = BrowserSummary {
        browser: browser.to_string(),
        ..Default::default()
    };

    for feature in features {
        for scenario in &feature.elements {
            for step in &scenario.steps {
                summary.duration_ns += step.duration_ns();
            }
            match classify_scenario(scenario) {
                ScenarioOutcome::Passed => summary.passed += 1,
                ScenarioOutcome::Failed => summary.failed += 1,
                ScenarioOutcome::Skipped => summary.skipped += 1,
            }
        }
    }

    summary.total = summary.passed + summary.failed + summary.skipped;
    summary
}

/// Elementwise sum of browser summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,
}

impl AggregateSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Success rate as a one-decimal percentage string, `"0"` when no
    /// scenarios ran.
    pub fn success_rate(&self) -> String {
        if self.total == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.passed as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Combine per-browser summaries into the overall result. An empty input
/// yields the all-zero summary.
pub fn combine(summaries: &[BrowserSummary]) -> AggregateSummary {
    let mut aggregate = AggregateSummary::default();
    for summary in summaries {
        aggregate.passed += summary.passed;
        aggregate.failed += summary.failed;
        aggregate.skipped += summary.skipped;
        aggregate.total += summary.total;
    }
    aggregate
}

/// One browser's summary paired with the link to its detailed report, as
/// consumed by the renderers.
#[derive(Debug, Clone)]
pub struct BrowserReport {
    pub summary: BrowserSummary,
    pub detail_link: String,
}
