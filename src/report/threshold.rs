/// How the process should end once the report has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Threshold configured and not exceeded
    Pass,
    /// Threshold configured and exceeded
    Fail,
    /// No threshold configured; the failure rate does not affect the exit code
    NotEnforced,
}

impl ExitDecision {
    /// Exit code to force, if any.
    pub fn exit_code(self) -> Option<i32> {
        match self {
            ExitDecision::Pass => Some(0),
            ExitDecision::Fail => Some(1),
            ExitDecision::NotEnforced => None,
        }
    }
}

/// Failure rate compared against the acceptance threshold (both percentages).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCheck {
    pub threshold: Option<f64>,
    pub failure_rate: f64,
}

impl ThresholdCheck {
    pub fn new(threshold: Option<f64>, failure_rate: f64) -> Self {
        Self {
            threshold,
            failure_rate,
        }
    }

    /// Threshold used for display; an unset threshold shows as 0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(0.0)
    }

    pub fn passed(&self) -> bool {
        self.failure_rate <= self.effective_threshold()
    }

    pub fn decision(&self) -> ExitDecision {
        match self.threshold {
            None => ExitDecision::NotEnforced,
            Some(threshold) if self.failure_rate > threshold => ExitDecision::Fail,
            Some(_) => ExitDecision::Pass,
        }
    }
}
