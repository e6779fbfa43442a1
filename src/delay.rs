//! Delay sentinels and the timeout-vs-error classification policy shared by
//! every probe strategy.

use std::time::Duration;

use crate::error::ProbeError;

/// Round-trip delay in milliseconds.
pub type Delay = i64;

/// Reported when the probe failed because its own deadline fired.
pub const DELAY_TIMEOUT: Delay = 11000;

/// Reported for every other failure: refused, reset, DNS, bad input.
pub const DELAY_ERROR: Delay = 10000;

/// An error whose elapsed time lands within this many milliseconds of the
/// configured timeout is treated as the deadline firing rather than a
/// network-level failure.
pub const TIMEOUT_TOLERANCE_MS: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Measured,
    TimedOut,
    Failed,
}

/// The `(delay, error)` pair produced by a probe.
///
/// `delay` is always populated: the measured milliseconds on success, or
/// one of the sentinels when `error` is set.
#[derive(Debug)]
pub struct Measurement {
    pub delay: Delay,
    pub error: Option<ProbeError>,
}

impl Measurement {
    pub fn measured(delay: Delay) -> Self {
        Self { delay, error: None }
    }

    /// Failure that never reached the network (empty address, unparsable
    /// proxy, engine start).
    pub fn failed(error: ProbeError) -> Self {
        Self {
            delay: DELAY_ERROR,
            error: Some(error),
        }
    }

    pub fn timed_out(error: ProbeError) -> Self {
        Self {
            delay: DELAY_TIMEOUT,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn outcome(&self) -> Outcome {
        match (&self.error, self.delay) {
            (None, _) => Outcome::Measured,
            (Some(_), DELAY_TIMEOUT) => Outcome::TimedOut,
            (Some(_), _) => Outcome::Failed,
        }
    }

    pub fn into_result(self) -> Result<Delay, ProbeError> {
        match self.error {
            None => Ok(self.delay),
            Some(e) => Err(e),
        }
    }
}

/// Turn the elapsed time and result of one timed operation into a
/// [`Measurement`].
pub fn classify(elapsed: Duration, timeout_secs: u64, result: Result<(), ProbeError>) -> Measurement {
    let delay = i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX);
    match result {
        Ok(()) => Measurement::measured(delay),
        Err(e) => {
            let timeout_ms = i64::try_from(timeout_secs)
                .unwrap_or(i64::MAX)
                .saturating_mul(1000);
            let precision = delay.saturating_sub(timeout_ms);
            if precision.unsigned_abs() < TIMEOUT_TOLERANCE_MS as u64 {
                Measurement::timed_out(e)
            } else {
                Measurement::failed(e)
            }
        }
    }
}
