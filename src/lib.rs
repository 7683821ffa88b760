//! Rate-governed client for the CRPT document-submission API—strict per-interval admission
//! control, typed failure taxonomy, and transport-aware observability in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod admission;
pub mod codec;
pub mod document;
pub mod error;
pub mod governor;
pub mod http;
pub mod obs;
pub mod quota;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		governor::{Governor, ReqwestGovernor},
		http::ReqwestSubmitClient,
		quota::Quota,
	};

	/// Constructs a [`Governor`] aimed at a mock endpoint with the reqwest transport used
	/// across integration tests.
	pub fn build_reqwest_test_governor(endpoint: Url, quota: Quota) -> ReqwestGovernor {
		Governor::with_http_client(quota, ReqwestSubmitClient::default())
			.expect("Test governor should build successfully.")
			.with_endpoint(endpoint)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
