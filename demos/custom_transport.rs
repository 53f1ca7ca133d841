//! Demonstrates plugging a custom HTTP transport into the client.
//!
//! 1. Implement [`TokenHttpClient`] for your transport; it performs one round trip per call.
//! 2. Pass it to [`OAuth2Client::with_http_client`] alongside the [`ClientConfig`].
//! 3. Transport failures come back as [`TransportError::Network`] with your error as the source.

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
};
// crates.io
use color_eyre::Result;
// self
use ebay_oauth2::{
	config::{ClientConfig, Environment},
	error::{Error, TransportError},
	flows::OAuth2Client,
	http::{HttpFuture, HttpRequest, HttpResponse, TokenHttpClient},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::for_environment(
		Environment::Sandbox,
		"demo-app-id",
		"demo-cert-id",
		"demo-ru-name",
	);
	let client = OAuth2Client::with_http_client(config.clone(), MockHttpClient::Success);
	let token =
		client.client_credentials(["https://api.ebay.com/oauth/api_scope"]).access_token().await?;

	println!("Access token issued by the mock transport: {}.", token.access_token.expose());

	let failing = OAuth2Client::with_http_client(
		config,
		MockHttpClient::Failure(MockTransportError::DnsFailure { host: "auth.sandbox.ebay.com" }),
	);

	let result =
		failing.client_credentials(["https://api.ebay.com/oauth/api_scope"]).access_token().await;

	match result {
		Err(Error::Transport(TransportError::Network { source })) => {
			println!("Transport failed as expected: {source}");
		},
		other => println!("Unexpected result: {other:?}."),
	}

	Ok(())
}

#[derive(Clone, Debug)]
enum MockTransportError {
	DnsFailure { host: &'static str },
}
impl Display for MockTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::DnsFailure { host } => write!(f, "DNS lookup failed for {host}."),
		}
	}
}
impl StdError for MockTransportError {}

enum MockHttpClient {
	Success,
	Failure(MockTransportError),
}
impl TokenHttpClient for MockHttpClient {
	type TransportError = MockTransportError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		println!("{} {}", request.method(), request.uri());

		Box::pin(async move {
			match self {
				Self::Success => Ok(HttpResponse::new(
					b"{\"access_token\":\"mock-access\",\"expires_in\":7200,\"token_type\":\"Application Access Token\"}"
						.to_vec(),
				)),
				Self::Failure(error) => Err(error.clone()),
			}
		})
	}
}
