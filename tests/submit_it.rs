// crates.io
use httpmock::prelude::*;
use serde::Deserialize;
use url::Url;
// self
use crpt_governor::{
	document::{Document, Product},
	error::{Error, TransportError},
	governor::{Governor, ReqwestGovernor, SubmitRequest},
	http::ReqwestSubmitClient,
	quota::Quota,
};

fn build_governor(endpoint: Url, quota: Quota) -> ReqwestGovernor {
	Governor::with_http_client(quota, ReqwestSubmitClient::default())
		.expect("Test governor should build successfully.")
		.with_endpoint(endpoint)
}

#[derive(Debug, Deserialize, PartialEq)]
struct SubmissionReceipt {
	value: String,
}

fn sample_document() -> Document {
	Document {
		doc_id: Some("123".into()),
		doc_status: Some("Draft".into()),
		products: Some(vec![Product {
			certificate_document: Some("Certificate123".into()),
			..Default::default()
		}]),
		..Default::default()
	}
}

fn endpoint(server: &MockServer) -> Url {
	Url::parse(&server.url("/api/v3/lk/documents/create"))
		.expect("Mock submission endpoint should parse successfully.")
}

#[tokio::test]
async fn submit_posts_signed_document_once() {
	let server = MockServer::start_async().await;
	let governor = build_governor(
		endpoint(&server),
		Quota::per_second(5).expect("Quota should validate."),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.header("content-type", "application/json")
				.header("signature", "signature123")
				.json_body(serde_json::json!({
					"doc_id": "123",
					"doc_status": "Draft",
					"products": [{ "certificate_document": "Certificate123" }],
				}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"value\":\"accepted\"}");
		})
		.await;
	let receipt: Option<SubmissionReceipt> = governor
		.submit(SubmitRequest::new(sample_document(), "signature123"))
		.await
		.expect("Submission should succeed against the mock endpoint.");

	assert_eq!(receipt, Some(SubmissionReceipt { value: "accepted".into() }));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn submit_surfaces_non_success_status_with_doc_id() {
	let server = MockServer::start_async().await;
	let governor = build_governor(
		endpoint(&server),
		Quota::per_second(5).expect("Quota should validate."),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/lk/documents/create");
			then.status(503).body("upstream unavailable");
		})
		.await;
	let err = governor
		.submit::<SubmissionReceipt>(SubmitRequest::new(sample_document(), "signature123"))
		.await
		.expect_err("Non-success statuses should surface as transport errors.");

	match err {
		Error::Transport(TransportError::Status { doc_id, status }) => {
			assert_eq!(doc_id.as_deref(), Some("123"));
			assert_eq!(status, 503);
		},
		other => panic!("Expected a status transport error, got: {other:?}"),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn submit_surfaces_connection_failure_with_doc_id() {
	let unreachable = Url::parse("http://127.0.0.1:9/api/v3/lk/documents/create")
		.expect("Unreachable endpoint should parse.");
	let governor = build_governor(
		unreachable,
		Quota::per_second(1).expect("Quota should validate."),
	);
	let err = governor
		.submit::<SubmissionReceipt>(SubmitRequest::new(sample_document(), "signature123"))
		.await
		.expect_err("Connection failures should surface as transport errors.");

	match err {
		Error::Transport(TransportError::Network { doc_id, .. }) => {
			assert_eq!(doc_id.as_deref(), Some("123"));
		},
		other => panic!("Expected a network transport error, got: {other:?}"),
	}
}

#[tokio::test]
async fn submit_degrades_mismatched_body_to_empty_result() {
	let server = MockServer::start_async().await;
	let governor = build_governor(
		endpoint(&server),
		Quota::per_second(5).expect("Quota should validate."),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/lk/documents/create");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"value\":42}");
		})
		.await;
	let receipt: Option<SubmissionReceipt> = governor
		.submit(SubmitRequest::new(sample_document(), "signature123"))
		.await
		.expect("A mismatched body should degrade, not fail the call.");

	assert_eq!(receipt, None);
	// The network call still happened and still counted against the quota.
	assert_eq!(governor.admission.in_use(), 1);

	mock.assert_async().await;
}
