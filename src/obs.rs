//! Optional observability helpers for submission calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `crpt_governor.submit` with the `stage`
//!   (call site) field, plus debug/warn events from the admission controller and dispatcher.
//! - Enable `metrics` to increment the `crpt_governor_submit_total` counter for every
//!   attempt/success/degraded/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// Successful completion with a decoded result.
	Success,
	/// Network call succeeded but the body failed to decode; an empty result
	/// was returned.
	Degraded,
	/// Failure propagated back to the caller.
	Failure,
}
impl SubmitOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SubmitOutcome::Attempt => "attempt",
			SubmitOutcome::Success => "success",
			SubmitOutcome::Degraded => "degraded",
			SubmitOutcome::Failure => "failure",
		}
	}
}
impl Display for SubmitOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
