//! Client Credentials flow: a direct machine-to-machine token request.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, GrantType},
	flows::{OAuth2Client, common},
	http::TokenHttpClient,
	obs::{self, FlowKind},
	oauth::RequestBody,
};

/// Application token request for a set of scopes.
pub struct ClientCredentialsFlow<C>
where
	C: ?Sized + TokenHttpClient,
{
	client: OAuth2Client<C>,
	scopes: Vec<String>,
}
impl<C> ClientCredentialsFlow<C>
where
	C: ?Sized + TokenHttpClient,
{
	pub(super) fn new(client: OAuth2Client<C>, scopes: Vec<String>) -> Self {
		Self { client, scopes }
	}

	/// Scopes requested by this flow, in caller order.
	pub fn scopes(&self) -> &[String] {
		&self.scopes
	}

	/// Always [`GrantType::ClientCredentials`].
	pub fn grant_type(&self) -> GrantType {
		GrantType::ClientCredentials
	}

	/// Token request body: `grant_type`, `redirect_uri`, and `scope` when any were requested.
	pub fn request_body(&self) -> RequestBody {
		let mut body =
			common::grant_body(self.grant_type().as_str(), self.client.config.redirect_uri());

		if !self.scopes.is_empty() {
			body.set(common::FIELD_SCOPE, common::join_scopes(&self.scopes));
		}

		body
	}

	/// Requests an application access token.
	pub async fn access_token(&self) -> Result<AccessToken> {
		let body = self.request_body();

		obs::observe(FlowKind::ClientCredentials, "access_token", self.client.exchange_token(&body))
			.await
	}
}
impl<C> Debug for ClientCredentialsFlow<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientCredentialsFlow")
			.field("client", &self.client)
			.field("scopes", &self.scopes)
			.finish()
	}
}
