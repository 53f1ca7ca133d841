//! Access token documents returned by the token endpoint.

// self
use crate::{_prelude::*, auth::Secret};

/// Token issued by a successful exchange.
///
/// The record is handed to the caller as-is; the crate does not track expiry or refresh it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Access token secret; callers must avoid logging it.
	pub access_token: Secret,
	/// Lifetime of the access token in seconds.
	pub expires_in: u64,
	/// Refresh token, issued only by the Authorization Code grant.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<Secret>,
	/// Lifetime of the refresh token in seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token_expires_in: Option<u64>,
	/// Token type reported by the server (e.g. `User Access Token`, `Application Access Token`).
	pub token_type: String,
}
impl AccessToken {
	/// Formats the value for an `Authorization` header (`Bearer <token>`).
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.access_token.expose())
	}
}
