//! Transport primitives for document submissions.
//!
//! The module exposes [`SubmitHttpClient`] so downstream crates can integrate
//! custom HTTP stacks. The trait is the governor's only dependency on an HTTP
//! implementation: it receives a fully-built [`OutboundRequest`] and answers
//! with a [`RawResponse`] (status plus body bytes) or a transport error. The
//! returned future must own its state (`'static + Send`) because the
//! dispatcher runs it on a dedicated task so one call's network latency never
//! blocks admission bookkeeping or other callers.

// self
use crate::_prelude::*;

/// HTTP header carrying the caller-supplied detached signature.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Boxed future returned by [`SubmitHttpClient::execute`].
pub type SubmitFuture<Error> =
	Pin<Box<dyn Future<Output = Result<RawResponse, Error>> + 'static + Send>>;

/// Abstraction over HTTP transports capable of executing one submission call.
///
/// Implementations perform exactly one request per [`execute`](Self::execute)
/// invocation and never retry; retry policy is out of the governor's scope.
pub trait SubmitHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes the request and resolves with the raw response.
	fn execute(&self, request: OutboundRequest) -> SubmitFuture<Self::TransportError>;
}

/// Fully-built outbound request handed to the transport.
///
/// The governor always submits `POST` with `Content-Type: application/json`
/// and a [`SIGNATURE_HEADER`] header; transports only need to carry the parts
/// that vary per call.
#[derive(Clone, Debug)]
pub struct OutboundRequest {
	/// Submission endpoint URL.
	pub endpoint: Url,
	/// Caller-supplied signature forwarded verbatim in [`SIGNATURE_HEADER`].
	pub signature: String,
	/// Encoded JSON request body.
	pub body: Vec<u8>,
}

/// Raw response surfaced to the dispatcher before decoding.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code returned by the endpoint.
	pub status: u16,
	/// Unparsed response body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Whether the status code is in the 2xx success range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. The default client follows reqwest defaults; callers needing custom
/// TLS or proxy settings pass their own client via
/// [`with_client`](Self::with_client).
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestSubmitClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestSubmitClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestSubmitClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SubmitHttpClient for ReqwestSubmitClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: OutboundRequest) -> SubmitFuture<Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.post(request.endpoint)
				.header(reqwest::header::CONTENT_TYPE, "application/json")
				.header(SIGNATURE_HEADER, request.signature)
				.body(request.body)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
