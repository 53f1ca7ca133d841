//! Token exchange primitive shared by every grant.
//!
//! Both flows reduce to the same request: a form-encoded POST to the token endpoint
//! authenticated with HTTP Basic (`client_id:client_secret`). [`OAuth2Client::exchange_token`]
//! builds that request from a [`RequestBody`], hands it to the transport once, and turns the
//! response into an [`AccessToken`] or a typed [`Error`].

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use oauth2::http::{
	Method,
	header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::TOKEN_PATH,
	error::{ConfigError, TransportError},
	flows::OAuth2Client,
	http::{HttpRequest, HttpResponse, TokenHttpClient},
};

/// Content type of every token request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form fields sent to the token endpoint.
///
/// Keys are kept sorted so the encoded body is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestBody(BTreeMap<String, String>);
impl RequestBody {
	/// Creates an empty body.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a field.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Builder-style variant of [`set`](Self::set).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);

		self
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no fields are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over fields in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Encodes the fields as `application/x-www-form-urlencoded`.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}

	/// Parses an `application/x-www-form-urlencoded` body; later duplicates win.
	pub fn decode(input: &str) -> Self {
		Self(form_urlencoded::parse(input.as_bytes()).into_owned().collect())
	}
}
impl<K, V> FromIterator<(K, V)> for RequestBody
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}

#[derive(Deserialize)]
struct OAuthErrorBody {
	error: Option<String>,
	error_description: Option<String>,
}

impl<C> OAuth2Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Absolute URL of the token endpoint.
	pub fn token_url(&self) -> Result<Url> {
		self.config.resolve(TOKEN_PATH)
	}

	/// `Authorization` header value: `Basic base64(client_id:client_secret)`.
	pub fn basic_authorization(&self) -> String {
		let credentials =
			format!("{}:{}", self.config.client_id(), self.config.client_secret().expose());

		format!("Basic {}", STANDARD.encode(credentials))
	}

	/// Builds the POST sent to the token endpoint for `body`.
	pub fn build_token_request(&self, body: &RequestBody) -> Result<HttpRequest> {
		let request = oauth2::http::Request::builder()
			.method(Method::POST)
			.uri(self.token_url()?.as_str())
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.header(ACCEPT, "application/json")
			.header(AUTHORIZATION, self.basic_authorization())
			.body(body.encode().into_bytes())
			.map_err(ConfigError::from)?;

		Ok(request)
	}

	/// Sends `body` to the token endpoint and parses the issued token.
	///
	/// The transport is invoked exactly once; nothing is retried.
	pub async fn exchange_token(&self, body: &RequestBody) -> Result<AccessToken> {
		let request = self.build_token_request(body)?;
		let response = self.http_client.execute(request).await.map_err(TransportError::network)?;

		parse_token_response(response)
	}
}

/// Maps a token endpoint response into an [`AccessToken`].
///
/// Non-2xx responses become [`Error::AuthServer`] carrying whatever OAuth error fields the
/// body provides; 2xx bodies that do not match the token schema become
/// [`Error::MalformedResponse`].
pub fn parse_token_response(response: HttpResponse) -> Result<AccessToken> {
	let status = response.status();
	let body = response.body();

	if !status.is_success() {
		let oauth_error = serde_json::from_slice::<OAuthErrorBody>(body).ok();
		let (error, description) = match oauth_error {
			Some(parsed) => (parsed.error, parsed.error_description),
			None => (None, None),
		};

		return Err(Error::AuthServer { status: status.as_u16(), error, description });
	}

	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::MalformedResponse { source, status: status.as_u16() })
}
