// self
use crate::_prelude::*;

/// OAuth 2.0 grant types implemented by the crate's flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant (user consent via browser redirect).
	AuthorizationCode,
	/// Client Credentials grant for application tokens.
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier sent as `grant_type`.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn serde_labels_match_wire_identifiers() {
		for grant in [GrantType::AuthorizationCode, GrantType::ClientCredentials] {
			let json = serde_json::to_string(&grant).expect("Grant type should serialize.");

			assert_eq!(json, format!("\"{}\"", grant.as_str()));
		}
	}
}
