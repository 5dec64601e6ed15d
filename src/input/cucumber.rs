use serde::{Deserialize, Serialize};

// ============================================================================
// Cucumber JSON wire model — the externally-fixed report schema
// ============================================================================

/// One feature file's results, as emitted by a Cucumber JSON formatter.
///
/// A full report document is a JSON array of these. Producers disagree on
/// which optional fields they emit, so everything beyond the nesting
/// structure is defaulted rather than required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// Scenarios of this feature. Absent in reports for empty features.
    #[serde(default)]
    pub elements: Vec<Scenario>,
}

/// A single scenario: an ordered list of executed steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One step of a scenario. A step that never ran may carry no `result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub result: Option<StepResult>,
}

impl Step {
    /// Execution status, with a missing `result` reading as `Undefined`.
    pub fn status(&self) -> StepStatus {
        self.result.as_ref().map_or(StepStatus::Undefined, |r| r.status)
    }

    /// Step duration in nanoseconds; zero when no result was recorded.
    pub fn duration_ns(&self) -> u64 {
        self.result.as_ref().map_or(0, |r| r.duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    #[serde(default)]
    pub status: StepStatus,

    /// Nanoseconds.
    #[serde(default)]
    pub duration: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Step outcome tag. Status strings outside the known set deserialize as
/// `Undefined` so one exotic formatter cannot fail a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    #[default]
    #[serde(other)]
    Undefined,
}
