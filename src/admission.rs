//! Admission control for outbound submissions.
//!
//! The controller enforces "at most `capacity` admitted calls start within any
//! `interval`-length window" independently of caller concurrency. A slot
//! consumed at time `T` is restored exactly at `T + interval` by a timer task
//! spawned per admission, never by the caller at call-completion time: the
//! remote service meters on submission time, so tying release to call duration
//! would let fast calls stretch the quota.

// crates.io
use tokio::sync::Semaphore;
// self
use crate::{_prelude::*, quota::Quota};

/// Serializes bursts of concurrent callers against a strict per-interval quota.
///
/// Waiters queue FIFO on a fair semaphore, so admission order roughly tracks
/// arrival order. The only shared mutable state is the semaphore plus the
/// [`SlotLedger`] counter; nothing outside this type touches either.
#[derive(Debug)]
pub struct AdmissionController {
	quota: Quota,
	slots: Arc<Semaphore>,
	ledger: Arc<Mutex<SlotLedger>>,
}
impl AdmissionController {
	/// Creates a controller with all `capacity` slots available.
	pub fn new(quota: Quota) -> Self {
		Self {
			slots: Arc::new(Semaphore::new(quota.capacity())),
			ledger: Arc::new(Mutex::new(SlotLedger::new(quota.capacity()))),
			quota,
		}
	}

	/// Waits until a slot is available, consumes it, and schedules its
	/// restoration `interval` from now.
	///
	/// When `deadline` is set and elapses before a slot is granted, the wait
	/// aborts with [`Error::Cancelled`] without consuming a slot; dropping the
	/// pending future has the same effect. Once this method returns `Ok`, the
	/// admission is final and the scheduled release fires on time regardless of
	/// what happens to the call that used it.
	pub async fn admit(&self, deadline: Option<StdDuration>) -> Result<()> {
		let permit = match deadline {
			Some(limit) => tokio::time::timeout(limit, self.slots.acquire())
				.await
				.map_err(|_| Error::Cancelled)?,
			None => self.slots.acquire().await,
		}
		// The semaphore is only closed when the controller is torn down, which
		// cancels every waiter.
		.map_err(|_| Error::Cancelled)?;

		// The permit must not flow back on drop; restoration is owned by the
		// timer task spawned below.
		permit.forget();
		self.ledger.lock().consume();

		#[cfg(feature = "tracing")]
		tracing::debug!(
			in_use = self.in_use(),
			capacity = self.quota.capacity(),
			"admission granted"
		);

		let slots = Arc::clone(&self.slots);
		let ledger = Arc::clone(&self.ledger);
		let interval = self.quota.interval();

		tokio::spawn(async move {
			tokio::time::sleep(interval).await;

			ledger.lock().restore();
			slots.add_permits(1);
		});

		Ok(())
	}

	/// Quota this controller enforces.
	pub const fn quota(&self) -> Quota {
		self.quota
	}

	/// Number of slots currently consumed within their interval window.
	pub fn in_use(&self) -> usize {
		self.ledger.lock().in_use
	}

	/// Number of slots available for immediate admission.
	pub fn available(&self) -> usize {
		self.slots.available_permits()
	}
}

/// Bookkeeping counter for slots consumed in the current window.
///
/// Bounded by `[0, capacity]`; `consume` and `restore` run under the
/// controller's mutex and the semaphore guarantees a consume can only follow a
/// granted permit, so the bounds hold by construction.
#[derive(Debug)]
struct SlotLedger {
	in_use: usize,
	capacity: usize,
}
impl SlotLedger {
	fn new(capacity: usize) -> Self {
		Self { in_use: 0, capacity }
	}

	fn consume(&mut self) {
		debug_assert!(self.in_use < self.capacity);

		self.in_use = self.in_use.saturating_add(1).min(self.capacity);
	}

	fn restore(&mut self) {
		debug_assert!(self.in_use > 0);

		self.in_use = self.in_use.saturating_sub(1);
	}
}
