//! Throughput quota configuration shared between the governor and the
//! admission controller.

// self
use crate::{_prelude::*, error::ConfigError};

/// Immutable throughput ceiling: at most `capacity` submissions may start
/// within any window of length `interval`.
///
/// Constructed once when the [`AdmissionController`](crate::admission::AdmissionController)
/// is built and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quota {
	capacity: usize,
	interval: StdDuration,
}
impl Quota {
	/// Creates a validated quota.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::ZeroCapacity`] when `capacity` is `0` and
	/// [`ConfigError::ZeroInterval`] when `interval` is empty.
	pub fn new(capacity: usize, interval: StdDuration) -> Result<Self, ConfigError> {
		if capacity == 0 {
			return Err(ConfigError::ZeroCapacity);
		}
		if interval.is_zero() {
			return Err(ConfigError::ZeroInterval);
		}

		Ok(Self { capacity, interval })
	}

	/// Shorthand for an N-requests-per-second quota.
	pub fn per_second(capacity: usize) -> Result<Self, ConfigError> {
		Self::new(capacity, StdDuration::from_secs(1))
	}

	/// Maximum number of submissions admitted per window.
	pub const fn capacity(&self) -> usize {
		self.capacity
	}

	/// Window length after which a consumed slot becomes available again.
	pub const fn interval(&self) -> StdDuration {
		self.interval
	}
}
