//! Demonstrates requesting an application token with the Client Credentials flow and the
//! default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use ebay_oauth2::{
	config::{ClientConfig, TOKEN_PATH},
	flows::OAuth2Client,
	http::ReqwestHttpClient,
	reqwest::Client,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"expires_in\":7200,\"token_type\":\"Application Access Token\"}",
			);
		})
		.await;
	let http_client = ReqwestHttpClient::with_client(
		Client::builder().redirect(ebay_oauth2::reqwest::redirect::Policy::none()).build()?,
	);
	let client = OAuth2Client::with_http_client(
		ClientConfig::new(server.base_url(), "demo-app-id", "demo-cert-id", "demo-ru-name"),
		http_client,
	);
	let token =
		client.client_credentials(["https://api.ebay.com/oauth/api_scope"]).access_token().await?;

	println!("Application token: {}.", token.access_token.expose());
	println!("Use it as `{}`.", token.bearer());

	token_mock.assert_async().await;

	Ok(())
}
