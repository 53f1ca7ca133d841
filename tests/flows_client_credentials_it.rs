mod common;

// self
use common::*;
use ebay_oauth2::{
	auth::GrantType,
	config::TOKEN_PATH,
	error::{Error, TransportError},
	oauth::FORM_CONTENT_TYPE,
};

const SCOPE: &str = "https://api.ebay.com/oauth/api_scope";

#[tokio::test]
async fn access_token_sends_expected_request() {
	let spy = RecordingHttpClient::issuing_token();
	let flow = client_with(&spy)
		.client_credentials([SCOPE, "https://api.ebay.com/oauth/api_scope/buy.item.feed"]);

	assert_eq!(flow.grant_type(), GrantType::ClientCredentials);

	let token = flow.access_token().await.expect("Client credentials request should succeed.");

	assert_eq!(token.access_token.expose(), "test-token");

	let call = spy.only_call();

	assert_eq!(call.method, "POST");
	assert_eq!(call.uri, format!("{BASE_URL}{TOKEN_PATH}"));
	assert_eq!(call.header("content-type"), Some(FORM_CONTENT_TYPE));
	assert_eq!(call.basic_auth(), Some((CLIENT_ID.to_owned(), CLIENT_SECRET.to_owned())));

	let form = call.form();

	assert_eq!(form.get("grant_type"), Some("client_credentials"));
	assert_eq!(form.get("redirect_uri"), Some(REDIRECT_URI));
	assert_eq!(
		form.get("scope"),
		Some("https://api.ebay.com/oauth/api_scope https://api.ebay.com/oauth/api_scope/buy.item.feed")
	);
	assert_eq!(form.get("code"), None);
}

#[tokio::test]
async fn empty_scopes_are_not_sent() {
	let spy = RecordingHttpClient::issuing_token();
	let flow = client_with(&spy).client_credentials(Vec::<String>::new());

	flow.access_token().await.expect("Client credentials request should succeed.");

	let form = spy.only_call().form();

	assert_eq!(form.get("scope"), None);
	assert_eq!(form.len(), 2);
}

#[tokio::test]
async fn flows_from_one_client_share_configuration() {
	let spy = RecordingHttpClient::issuing_token();
	let client = client_with(&spy);
	let first_flow = client.client_credentials([SCOPE]);
	let second_flow = client.client_credentials([SCOPE]);
	let (first, second) = tokio::join!(first_flow.access_token(), second_flow.access_token());

	first.expect("First request should succeed.");
	second.expect("Second request should succeed.");

	for call in spy.calls() {
		assert_eq!(call.basic_auth(), Some((CLIENT_ID.to_owned(), CLIENT_SECRET.to_owned())));
	}

	assert_eq!(spy.call_count(), 2);
}

#[tokio::test]
async fn transport_failure_is_attempted_once() {
	let spy = RecordingHttpClient::failing();
	let err = client_with(&spy)
		.client_credentials([SCOPE])
		.access_token()
		.await
		.expect_err("Transport failure should surface.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(spy.call_count(), 1);
}

#[tokio::test]
async fn unauthorized_client_maps_to_auth_server_error() {
	let spy = RecordingHttpClient::responding(
		401,
		r#"{"error":"invalid_client","error_description":"client authentication failed"}"#,
	);
	let err = client_with(&spy)
		.client_credentials([SCOPE])
		.access_token()
		.await
		.expect_err("HTTP 401 should fail.");

	assert!(matches!(err, Error::AuthServer { status: 401, .. }));
}
