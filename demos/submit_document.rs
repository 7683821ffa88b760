//! Demonstrates submitting a signed document through the governor with the default reqwest
//! transport, a 5-requests-per-second quota, and a mock endpoint standing in for production.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde::Deserialize;
use url::Url;
// self
use crpt_governor::{
	document::{Document, Product},
	governor::{Governor, SubmitRequest},
	quota::Quota,
};

#[derive(Debug, Deserialize)]
struct SubmissionReceipt {
	value: String,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let submit_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.header("signature", "signature123");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"value\":\"accepted\"}");
		})
		.await;
	let governor = Governor::new(Quota::per_second(5)?)?
		.with_endpoint(Url::parse(&server.url("/api/v3/lk/documents/create"))?);
	let document = Document {
		doc_id: Some("123".into()),
		doc_status: Some("Draft".into()),
		products: Some(vec![Product {
			certificate_document: Some("Certificate123".into()),
			..Default::default()
		}]),
		..Default::default()
	};
	let receipt: Option<SubmissionReceipt> =
		governor.submit(SubmitRequest::new(document, "signature123")).await?;

	match receipt {
		Some(receipt) => println!("Endpoint acknowledged the submission: {}.", receipt.value),
		None => println!("Endpoint answered with an unexpected body; no receipt decoded."),
	}

	submit_mock.assert_async().await;

	Ok(())
}
