//! Payload codec bridging in-memory documents and the JSON wire format.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, document::Document, error::DecodeError};

/// Serializes a document into the request body.
///
/// # Errors
///
/// Returns [`Error::Encoding`] when the in-memory value cannot be serialized;
/// this signals a caller bug and is raised before any network contact.
pub fn encode(document: &Document) -> Result<Vec<u8>> {
	serde_json::to_vec(document).map_err(|e| Error::Encoding { source: e })
}

/// Deserializes a raw response body into the caller-defined result shape.
///
/// # Errors
///
/// Returns [`DecodeError::Body`] with the JSON path that failed, so a
/// structurally mismatched response stays diagnosable even though
/// [`Governor::submit`](crate::governor::Governor::submit) degrades it to an
/// empty result.
pub fn decode<R>(body: &[u8]) -> Result<R, DecodeError>
where
	R: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|e| DecodeError::Body { source: e })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::document::Product;

	#[derive(Debug, Deserialize, PartialEq)]
	struct SubmissionReceipt {
		value: String,
	}

	#[test]
	fn encode_then_decode_preserves_the_document() {
		let document = Document {
			doc_id: Some("123".into()),
			doc_status: Some("Draft".into()),
			products: Some(vec![Product {
				certificate_document: Some("Certificate123".into()),
				..Default::default()
			}]),
			..Default::default()
		};
		let body = encode(&document).expect("Document should encode.");
		let round_tripped: Document = decode(&body).expect("Encoded document should decode.");

		assert_eq!(round_tripped, document);
	}

	#[test]
	fn decode_reports_the_failing_path() {
		let err = decode::<SubmissionReceipt>(br#"{"value":42}"#)
			.expect_err("Mismatched shape should fail to decode.");
		let DecodeError::Body { source } = err;

		assert_eq!(source.path().to_string(), "value");
	}

	#[test]
	fn decode_rejects_malformed_json() {
		decode::<SubmissionReceipt>(b"not json")
			.expect_err("Malformed body should fail to decode.");
	}

	#[test]
	fn decode_failure_converts_into_the_crate_error() {
		let err: Error = decode::<SubmissionReceipt>(br#"{"value":42}"#)
			.expect_err("Mismatched shape should fail to decode.")
			.into();

		assert!(matches!(err, Error::Decoding(_)));
	}
}
