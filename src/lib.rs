pub mod blocking;
pub mod config;
pub mod delay;
pub mod engine;
pub mod error;
pub mod prober;
pub mod report;
pub mod util;

pub use delay::{Delay, Measurement, Outcome, DELAY_ERROR, DELAY_TIMEOUT, TIMEOUT_TOLERANCE_MS};
pub use error::ProbeError;
