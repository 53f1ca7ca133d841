//! Shared fixtures and a recording transport double for integration tests.

#![allow(dead_code)]

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use parking_lot::Mutex;
// self
use ebay_oauth2::{
	config::ClientConfig,
	flows::OAuth2Client,
	http::{HttpFuture, HttpRequest, HttpResponse, TokenHttpClient},
	oauth::RequestBody,
	oauth2::http::{HeaderMap, Method, Response, StatusCode, header::AUTHORIZATION},
};

pub const BASE_URL: &str = "https://auth.example.com";
pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const REDIRECT_URI: &str = "https://my.host.com/oauth";
pub const TOKEN_BODY: &str =
	r#"{"access_token":"test-token","expires_in":60,"token_type":"bearer"}"#;

#[derive(Debug)]
pub enum SpyTransportError {
	ConnectionRefused,
}
impl Display for SpyTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::ConnectionRefused => write!(f, "Connection refused."),
		}
	}
}
impl StdError for SpyTransportError {}

/// Request captured by [`RecordingHttpClient`].
#[derive(Clone, Debug)]
pub struct CapturedRequest {
	pub method: Method,
	pub uri: String,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}
impl CapturedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	pub fn form(&self) -> RequestBody {
		RequestBody::decode(std::str::from_utf8(&self.body).expect("Body should be UTF-8."))
	}

	/// Decodes the Basic credentials into `(client_id, client_secret)`.
	pub fn basic_auth(&self) -> Option<(String, String)> {
		let encoded = self.headers.get(AUTHORIZATION)?.to_str().ok()?.strip_prefix("Basic ")?;
		let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
		let (id, secret) = decoded.split_once(':')?;

		Some((id.to_owned(), secret.to_owned()))
	}
}

#[derive(Clone)]
enum Reply {
	Respond { status: StatusCode, body: String },
	Fail,
}

/// Transport double that records every request and replays a canned reply.
#[derive(Clone)]
pub struct RecordingHttpClient {
	calls: Arc<Mutex<Vec<CapturedRequest>>>,
	reply: Reply,
}
impl RecordingHttpClient {
	pub fn responding(status: u16, body: &str) -> Self {
		Self {
			calls: Default::default(),
			reply: Reply::Respond {
				status: StatusCode::from_u16(status).expect("Status fixture should be valid."),
				body: body.to_owned(),
			},
		}
	}

	pub fn issuing_token() -> Self {
		Self::responding(200, TOKEN_BODY)
	}

	pub fn failing() -> Self {
		Self { calls: Default::default(), reply: Reply::Fail }
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	pub fn calls(&self) -> Vec<CapturedRequest> {
		self.calls.lock().clone()
	}

	pub fn only_call(&self) -> CapturedRequest {
		let calls = self.calls();

		assert_eq!(calls.len(), 1, "Exactly one transport call was expected.");

		calls.into_iter().next().expect("A recorded call should exist.")
	}
}
impl TokenHttpClient for RecordingHttpClient {
	type TransportError = SpyTransportError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let (parts, body) = request.into_parts();

		self.calls.lock().push(CapturedRequest {
			method: parts.method,
			uri: parts.uri.to_string(),
			headers: parts.headers,
			body,
		});

		let reply = self.reply.clone();

		Box::pin(async move {
			match reply {
				Reply::Respond { status, body } => Ok::<HttpResponse, SpyTransportError>(
					Response::builder()
						.status(status)
						.header("content-type", "application/json")
						.body(body.into_bytes())
						.expect("Response fixture should build."),
				),
				Reply::Fail => Err(SpyTransportError::ConnectionRefused),
			}
		})
	}
}

pub fn config() -> ClientConfig {
	ClientConfig::new(BASE_URL, CLIENT_ID, CLIENT_SECRET, REDIRECT_URI)
}

/// Builds a client around `spy`, keeping a handle for call inspection.
pub fn client_with(spy: &RecordingHttpClient) -> OAuth2Client<RecordingHttpClient> {
	OAuth2Client::with_http_client(config(), spy.clone())
}
