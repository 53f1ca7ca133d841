//! Walks through the Authorization Code flow: build the consent URL, then trade the code
//! from the redirect callback for a user token against a mock identity service.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use ebay_oauth2::{
	config::{ClientConfig, TOKEN_PATH},
	flows::OAuth2Client,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-user-token\",\"expires_in\":7200,\"refresh_token\":\"demo-refresh\",\"refresh_token_expires_in\":47304000,\"token_type\":\"User Access Token\"}",
			);
		})
		.await;
	let client = OAuth2Client::try_new(ClientConfig::new(
		server.base_url(),
		"demo-app-id",
		"demo-cert-id",
		"https://app.example.com/oauth/callback",
	))?;
	let flow = client
		.authorization_code(["https://api.ebay.com/oauth/api_scope/sell.inventory"])
		.with_prompt("login")
		.with_random_state();
	let consent = flow.grant_application_access_url()?;

	println!("Send your user to {consent}.");

	// Simulate the redirect handler receiving the code and the state it was given.
	let state = flow.state().unwrap_or_default();
	let callback =
		Url::parse(&format!("https://app.example.com/oauth/callback?code=demo-code&state={state}"))?;
	let token = flow.exchange_authorization_for_token(&callback).await?;

	println!(
		"{} expires in {}s (refresh token issued: {}).",
		token.token_type,
		token.expires_in,
		token.refresh_token.is_some()
	);

	token_mock.assert_async().await;

	Ok(())
}
