//! Ranking probed targets by responsiveness.

use std::fmt::Display;

use serde::Serialize;

use crate::config::TargetConfig;
use crate::delay::{Delay, Measurement, Outcome, DELAY_ERROR};
use crate::prober::ProbeKind;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Timeout,
    Error,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Measured => Status::Ok,
            Outcome::TimedOut => Status::Timeout,
            Outcome::Failed => Status::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub name: String,
    pub kind: ProbeKind,
    pub delay: Delay,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeReport {
    pub fn new(target: &TargetConfig, measurement: &Measurement) -> Self {
        Self {
            name: target.name.clone(),
            kind: target.kind,
            delay: measurement.delay,
            status: measurement.outcome().into(),
            error: measurement.error.as_ref().map(|e| e.to_string()),
        }
    }

    /// Report for a target whose probe never returned a measurement.
    pub fn aborted(target: &TargetConfig, reason: impl Display) -> Self {
        Self {
            name: target.name.clone(),
            kind: target.kind,
            delay: DELAY_ERROR,
            status: Status::Error,
            error: Some(reason.to_string()),
        }
    }
}

/// Fastest measured targets first, then timeouts, then errors.
pub fn rank(mut reports: Vec<ProbeReport>) -> Vec<ProbeReport> {
    reports.sort_by(|a, b| {
        (a.status, a.delay, &a.name).cmp(&(b.status, b.delay, &b.name))
    });
    reports
}
