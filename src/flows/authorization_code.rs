//! Authorization Code flow: consent URL, callback validation, and code exchange.
//!
//! The flow has two phases that the caller drives in order:
//!
//! 1. [`AuthorizationCodeFlow::grant_application_access_url`] builds the URL the user is sent to.
//! 2. [`AuthorizationCodeFlow::exchange_authorization_for_token`] takes the URL the redirect
//!    target was invoked with, checks `code` and `state`, and trades the code for a token.
//!
//! The `state` comparison is the CSRF defense. When neither side carries a state the callback
//! is accepted; any other difference, including a state present on only one side, is rejected.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, GrantType},
	config::AUTHORIZE_PATH,
	flows::{OAuth2Client, common},
	http::TokenHttpClient,
	obs::{self, FlowKind, FlowSpan},
	oauth::RequestBody,
};

const STATE_LEN: usize = 32;
const RESPONSE_TYPE_CODE: &str = "code";

/// One authorization attempt for a set of scopes.
///
/// Options are attached with the consuming `with_*` methods right after
/// [`OAuth2Client::authorization_code`]; the flow is read-only afterwards.
pub struct AuthorizationCodeFlow<C>
where
	C: ?Sized + TokenHttpClient,
{
	client: OAuth2Client<C>,
	scopes: Vec<String>,
	state: Option<String>,
	prompt: Option<String>,
}
impl<C> AuthorizationCodeFlow<C>
where
	C: ?Sized + TokenHttpClient,
{
	pub(super) fn new(client: OAuth2Client<C>, scopes: Vec<String>) -> Self {
		Self { client, scopes, state: None, prompt: None }
	}

	/// Sets the `prompt` parameter (e.g. `login`); an empty value clears it.
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into()).filter(|value| !value.is_empty());

		self
	}

	/// Sets the opaque CSRF `state`; an empty value clears it.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into()).filter(|value| !value.is_empty());

		self
	}

	/// Generates a random alphanumeric CSRF `state`.
	pub fn with_random_state(self) -> Self {
		let state = rand::rng()
			.sample_iter(Alphanumeric)
			.take(STATE_LEN)
			.map(char::from)
			.collect::<String>();

		self.with_state(state)
	}

	/// Scopes requested by this flow, in caller order.
	pub fn scopes(&self) -> &[String] {
		&self.scopes
	}

	/// Expected CSRF state, if any.
	pub fn state(&self) -> Option<&str> {
		self.state.as_deref()
	}

	/// Prompt sent with the consent URL, if any.
	pub fn prompt(&self) -> Option<&str> {
		self.prompt.as_deref()
	}

	/// Always [`GrantType::AuthorizationCode`].
	pub fn grant_type(&self) -> GrantType {
		GrantType::AuthorizationCode
	}

	/// Builds the consent URL that starts the flow.
	///
	/// Fails with a configuration error when the base URL cannot be parsed.
	pub fn grant_application_access_url(&self) -> Result<Url> {
		let span = FlowSpan::new(FlowKind::AuthorizationCode, "grant_application_access_url");
		let result = span.in_scope(|| self.build_consent_url());

		span.record_result(&result);

		result
	}

	fn build_consent_url(&self) -> Result<Url> {
		let config = &self.client.config;
		let mut url = config.resolve(AUTHORIZE_PATH)?;
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair(common::FIELD_CLIENT_ID, config.client_id());

		if let Some(prompt) = &self.prompt {
			pairs.append_pair(common::FIELD_PROMPT, prompt);
		}

		pairs.append_pair(common::FIELD_REDIRECT_URI, config.redirect_uri());
		pairs.append_pair(common::FIELD_RESPONSE_TYPE, RESPONSE_TYPE_CODE);
		pairs.append_pair(common::FIELD_SCOPE, &common::join_scopes(&self.scopes));

		if let Some(state) = &self.state {
			pairs.append_pair(common::FIELD_STATE, state);
		}

		drop(pairs);

		Ok(url)
	}

	/// Checks the redirect callback and returns the authorization code.
	///
	/// A missing or empty `code` is reported before the state comparison.
	pub fn validate_callback(&self, callback: &Url) -> Result<String> {
		let code = common::query_value(callback, common::FIELD_CODE)
			.ok_or_else(|| Error::MissingAuthorizationCode { callback: callback.to_string() })?;
		let actual = common::query_value(callback, common::FIELD_STATE).unwrap_or_default();
		let expected = self.state.as_deref().unwrap_or_default();

		if actual != expected {
			return Err(Error::StateMismatch { expected: expected.to_owned(), actual });
		}

		Ok(code)
	}

	/// Token request body for an authorization `code`.
	pub fn request_body(&self, code: &str) -> RequestBody {
		common::grant_body(self.grant_type().as_str(), self.client.config.redirect_uri())
			.with(common::FIELD_CODE, code)
	}

	/// Validates `callback` and exchanges its code for an access token.
	///
	/// Every call re-validates and sends a new token request; the server decides whether a
	/// reused code is still acceptable.
	pub async fn exchange_authorization_for_token(&self, callback: &Url) -> Result<AccessToken> {
		obs::observe(FlowKind::AuthorizationCode, "exchange_authorization_for_token", async {
			let code = self.validate_callback(callback)?;

			self.client.exchange_token(&self.request_body(&code)).await
		})
		.await
	}
}
impl<C> Debug for AuthorizationCodeFlow<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthorizationCodeFlow")
			.field("client", &self.client)
			.field("scopes", &self.scopes)
			.field("state", &self.state)
			.field("prompt", &self.prompt)
			.finish()
	}
}
