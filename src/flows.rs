//! Grant flows spawned from a shared [`OAuth2Client`].

pub mod authorization_code;
pub mod client_credentials;
mod common;

pub use authorization_code::*;
pub use client_credentials::*;

// self
use crate::{_prelude::*, auth::Secret, config::ClientConfig, http::TokenHttpClient};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOAuth2Client = OAuth2Client<ReqwestHttpClient>;

/// Client registration paired with the transport used for every token exchange.
///
/// Both halves sit behind `Arc`, so cloning the client or spawning flows from it is cheap
/// and every flow observes the same immutable configuration. The transport is fixed at
/// construction; build a new client to use a different one.
pub struct OAuth2Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Shared client registration.
	pub config: Arc<ClientConfig>,
	/// HTTP transport used for token requests.
	pub http_client: Arc<C>,
}
impl<C> OAuth2Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		config: impl Into<Arc<ClientConfig>>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { config: config.into(), http_client: http_client.into() }
	}

	/// Authorization server root.
	pub fn base_url(&self) -> &str {
		self.config.base_url()
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		self.config.client_id()
	}

	/// OAuth client secret.
	pub fn client_secret(&self) -> &Secret {
		self.config.client_secret()
	}

	/// Registered redirect URI.
	pub fn redirect_uri(&self) -> &str {
		self.config.redirect_uri()
	}

	/// Starts an Authorization Code flow for `scopes`.
	///
	/// Attach a CSRF state or a prompt with the returned flow's builder methods.
	pub fn authorization_code<I, S>(&self, scopes: I) -> AuthorizationCodeFlow<C>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		AuthorizationCodeFlow::new(self.clone(), scopes.into_iter().map(Into::into).collect())
	}

	/// Starts a Client Credentials flow for `scopes`.
	pub fn client_credentials<I, S>(&self, scopes: I) -> ClientCredentialsFlow<C>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		ClientCredentialsFlow::new(self.clone(), scopes.into_iter().map(Into::into).collect())
	}
}
#[cfg(feature = "reqwest")]
impl OAuth2Client<ReqwestHttpClient> {
	/// Creates a client backed by a reqwest transport that never follows redirects.
	pub fn try_new(config: impl Into<Arc<ClientConfig>>) -> Result<Self> {
		Ok(Self::with_http_client(config, ReqwestHttpClient::try_new()?))
	}
}
impl<C> Clone for OAuth2Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self { config: Arc::clone(&self.config), http_client: Arc::clone(&self.http_client) }
	}
}
impl<C> Debug for OAuth2Client<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth2Client").field("config", &self.config).finish_non_exhaustive()
	}
}
