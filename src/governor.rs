//! Dispatcher orchestrating one logical submission end-to-end.
//!
//! [`Governor::submit`] owns the full pipeline for a single call: admission,
//! encoding, transport, decoding, and the error-to-result translation. Slot
//! release is never tied to call completion; the admission controller
//! schedules it the moment a slot is granted.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	admission::AdmissionController,
	codec,
	document::Document,
	error::{ConfigError, TransportError},
	http::{OutboundRequest, SubmitHttpClient},
	obs::{self, SubmitOutcome, SubmitSpan},
	quota::Quota,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestSubmitClient;

/// Production submission endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

#[cfg(feature = "reqwest")]
/// Governor specialized for the crate's default reqwest transport.
pub type ReqwestGovernor = Governor<ReqwestSubmitClient>;

/// Value object describing one submission.
///
/// Immutable once built; the dispatcher owns it for the duration of the call.
#[derive(Clone, Debug)]
pub struct SubmitRequest {
	/// Document to submit.
	pub document: Document,
	/// Detached signature forwarded verbatim in the `Signature` header.
	pub signature: String,
	/// Optional bound on how long to wait for admission before the call is
	/// cancelled. `None` waits indefinitely.
	pub deadline: Option<StdDuration>,
}
impl SubmitRequest {
	/// Creates a request that waits for admission without a deadline.
	pub fn new(document: Document, signature: impl Into<String>) -> Self {
		Self { document, signature: signature.into(), deadline: None }
	}

	/// Bounds the admission wait; expiry surfaces as [`Error::Cancelled`].
	pub fn with_deadline(mut self, deadline: StdDuration) -> Self {
		self.deadline = Some(deadline);

		self
	}
}

/// Coordinates rate-governed submissions against a single endpoint.
///
/// The governor owns the HTTP client, the admission controller, and the
/// endpoint URL so [`submit`](Self::submit) can focus on one call at a time.
/// Clones share the same admission controller, so a cloned governor still
/// counts against the same quota.
#[derive(Clone)]
pub struct Governor<C>
where
	C: ?Sized + SubmitHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Admission controller enforcing the configured quota.
	pub admission: Arc<AdmissionController>,
	/// Submission endpoint; defaults to [`DEFAULT_ENDPOINT`].
	pub endpoint: Url,
}
impl<C> Governor<C>
where
	C: ?Sized + SubmitHttpClient,
{
	/// Creates a governor that reuses the caller-provided transport.
	pub fn with_http_client(
		quota: Quota,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self, ConfigError> {
		let endpoint = Url::parse(DEFAULT_ENDPOINT)
			.map_err(|e| ConfigError::InvalidEndpoint { source: e })?;

		Ok(Self {
			http_client: http_client.into(),
			admission: Arc::new(AdmissionController::new(quota)),
			endpoint,
		})
	}

	/// Overrides the submission endpoint; the governor still targets exactly
	/// one endpoint at a time.
	pub fn with_endpoint(mut self, endpoint: Url) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Runs one logical submission end-to-end.
	///
	/// Blocks (asynchronously) until a slot is admitted, then encodes the
	/// document, performs the network call on a dedicated task, and decodes
	/// the response into the caller-defined shape `R`.
	///
	/// Returns `Ok(None)` when the endpoint answered with a success status but
	/// a body that does not match `R`; the call still consumed its slot. Any
	/// non-2xx status is a [`TransportError::Status`].
	///
	/// Must be called within a tokio runtime: both the slot-restoration timer
	/// and the transport task are spawned on it.
	///
	/// # Errors
	///
	/// [`Error::Cancelled`] when the admission deadline expires first,
	/// [`Error::Encoding`] for an unserializable document, and
	/// [`Error::Transport`] for network failures or non-success statuses.
	pub async fn submit<R>(&self, request: SubmitRequest) -> Result<Option<R>>
	where
		R: DeserializeOwned,
	{
		let span = SubmitSpan::new("submit");

		obs::record_submit_outcome(SubmitOutcome::Attempt);

		let result = span
			.instrument(async move {
				self.admission.admit(request.deadline).await?;

				let body = codec::encode(&request.document)?;
				let doc_id = request.document.doc_id().map(str::to_owned);
				let outbound = OutboundRequest {
					endpoint: self.endpoint.clone(),
					signature: request.signature,
					body,
				};
				// Dedicated task: a slow endpoint stalls only this call, never
				// the admission controller or sibling callers.
				let raw = tokio::spawn(self.http_client.execute(outbound))
					.await
					.map_err(|e| TransportError::network(doc_id.clone(), e))?
					.map_err(|e| TransportError::network(doc_id.clone(), e))?;

				if !raw.is_success() {
					return Err(
						TransportError::Status { doc_id, status: raw.status }.into()
					);
				}

				match codec::decode::<R>(&raw.body) {
					Ok(value) => Ok(Some(value)),
					Err(e) => {
						// The endpoint accepted the submission; a mismatched
						// body degrades to an empty result instead of failing
						// the call.
						let err = Error::from(e);

						#[cfg(feature = "tracing")]
						tracing::warn!(
							doc_id = doc_id.as_deref(),
							error = %err,
							"response body failed to decode; returning empty result"
						);
						#[cfg(not(feature = "tracing"))]
						let _ = (err, doc_id);

						Ok(None)
					},
				}
			})
			.await;

		match &result {
			Ok(Some(_)) => obs::record_submit_outcome(SubmitOutcome::Success),
			Ok(None) => obs::record_submit_outcome(SubmitOutcome::Degraded),
			Err(_) => obs::record_submit_outcome(SubmitOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Governor<ReqwestSubmitClient> {
	/// Creates a governor for the given quota with the crate's default
	/// reqwest-backed transport and the production endpoint.
	pub fn new(quota: Quota) -> Result<Self, ConfigError> {
		Self::with_http_client(quota, ReqwestSubmitClient::default())
	}
}
impl<C> Debug for Governor<C>
where
	C: ?Sized + SubmitHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Governor")
			.field("endpoint", &self.endpoint.as_str())
			.field("quota", &self.admission.quota())
			.finish()
	}
}
