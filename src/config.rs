//! Client configuration shared by every flow.
//!
//! [`ClientConfig`] is plain data: it is cheap to deserialize from whatever configuration
//! source the application already uses and performs no validation until a flow first
//! resolves an endpoint against the base URL.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Root of eBay's production identity service.
pub const PRODUCTION_BASE_URL: &str = "https://auth.ebay.com";
/// Root of eBay's sandbox identity service.
pub const SANDBOX_BASE_URL: &str = "https://auth.sandbox.ebay.com";

/// Path of the browser-facing authorization endpoint.
pub const AUTHORIZE_PATH: &str = "/oauth2/authorize";
/// Path of the token endpoint.
pub const TOKEN_PATH: &str = "/identity/v1/oauth2/token";

/// Named authorization-server presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	#[default]
	/// Live marketplace.
	Production,
	/// Developer sandbox.
	Sandbox,
}
impl Environment {
	/// Base URL of the environment's identity service.
	pub const fn base_url(self) -> &'static str {
		match self {
			Environment::Production => PRODUCTION_BASE_URL,
			Environment::Sandbox => SANDBOX_BASE_URL,
		}
	}
}

/// Immutable client registration used by all flows spawned from one client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	base_url: String,
	client_id: String,
	client_secret: Secret,
	redirect_uri: String,
}
impl ClientConfig {
	/// Creates a configuration; the base URL is only parsed on first use.
	pub fn new(
		base_url: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			base_url: base_url.into(),
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			redirect_uri: redirect_uri.into(),
		}
	}

	/// Creates a configuration pointing at one of the [`Environment`] presets.
	pub fn for_environment(
		environment: Environment,
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self::new(environment.base_url(), client_id, client_secret, redirect_uri)
	}

	/// Authorization server root.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// OAuth client identifier (eBay App ID).
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth client secret (eBay Cert ID).
	pub fn client_secret(&self) -> &Secret {
		&self.client_secret
	}

	/// Redirect URI registered for the application (eBay RuName).
	pub fn redirect_uri(&self) -> &str {
		&self.redirect_uri
	}

	/// Parses the base URL and replaces its path with `path`.
	///
	/// Any query or fragment on the base URL is dropped.
	pub fn resolve(&self, path: &str) -> Result<Url> {
		let mut url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
			url: self.base_url.clone(),
			source,
		})?;

		if url.cannot_be_a_base() {
			return Err(ConfigError::BaseUrlCannotBeABase { url: self.base_url.clone() }.into());
		}

		url.set_path(path);
		url.set_query(None);
		url.set_fragment(None);

		Ok(url)
	}
}
