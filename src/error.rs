//! Governor-level error types shared across admission, codec, and transport layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical governor error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Wait for an admission slot was aborted before a slot was granted.
	///
	/// Recoverable; the caller may submit again. No slot was consumed and no
	/// network call was made.
	#[error("Admission wait was cancelled before a slot was granted.")]
	Cancelled,
	/// Document could not be serialized into the wire format.
	///
	/// Indicates a malformed in-memory value, i.e. a caller bug rather than a
	/// transient condition. Raised before any network contact.
	#[error("Document could not be serialized.")]
	Encoding {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Transport failure (network, IO, non-success status).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body did not match the expected result shape.
	///
	/// [`Governor::submit`](crate::governor::Governor::submit) downgrades this
	/// to an empty result instead of surfacing it, reporting the failure
	/// through this variant in its diagnostics; it also lets callers driving
	/// [`codec`](crate::codec) directly `?` into a crate [`Result`].
	#[error(transparent)]
	Decoding(#[from] DecodeError),
}

/// Configuration and validation failures raised at construction time.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Submission endpoint URL cannot be parsed.
	#[error("Submission endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Quota capacity must admit at least one call per interval.
	#[error("Quota capacity must be at least 1.")]
	ZeroCapacity,
	/// Quota interval must be a positive duration.
	#[error("Quota interval must be greater than zero.")]
	ZeroInterval,
}

/// Transport-level failures, each carrying the originating document identifier
/// for diagnosis.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while submitting document {}.", doc_label(.doc_id))]
	Network {
		/// `doc_id` of the document whose submission failed, when set.
		doc_id: Option<String>,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Endpoint answered with a non-success (non-2xx) status.
	#[error("Endpoint returned status {status} for document {}.", doc_label(.doc_id))]
	Status {
		/// `doc_id` of the document whose submission failed, when set.
		doc_id: Option<String>,
		/// HTTP status code returned by the endpoint.
		status: u16,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error, tagging it with the document id.
	pub fn network(
		doc_id: Option<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { doc_id, source: Box::new(src) }
	}

	/// Returns the `doc_id` carried by this failure, when set.
	pub fn doc_id(&self) -> Option<&str> {
		match self {
			Self::Network { doc_id, .. } | Self::Status { doc_id, .. } => doc_id.as_deref(),
		}
	}
}

/// Structured decode failure for a response the endpoint delivered successfully.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Response body was malformed JSON or did not match the expected shape.
	#[error("Response body did not match the expected result shape.")]
	Body {
		/// Structured parsing failure including the path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

fn doc_label(doc_id: &Option<String>) -> &str {
	doc_id.as_deref().unwrap_or("<unset>")
}
