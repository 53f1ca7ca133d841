//! Shared helpers for flow implementations.

// self
use crate::{_prelude::*, oauth::RequestBody};

pub(crate) const FIELD_CLIENT_ID: &str = "client_id";
pub(crate) const FIELD_CODE: &str = "code";
pub(crate) const FIELD_GRANT_TYPE: &str = "grant_type";
pub(crate) const FIELD_PROMPT: &str = "prompt";
pub(crate) const FIELD_REDIRECT_URI: &str = "redirect_uri";
pub(crate) const FIELD_RESPONSE_TYPE: &str = "response_type";
pub(crate) const FIELD_SCOPE: &str = "scope";
pub(crate) const FIELD_STATE: &str = "state";

/// Joins scopes with single spaces, preserving caller order.
pub(crate) fn join_scopes(scopes: &[String]) -> String {
	scopes.join(" ")
}

/// Returns the first value for `key` in the URL query, treating empty values as absent.
pub(crate) fn query_value(url: &Url, key: &str) -> Option<String> {
	url.query_pairs()
		.find(|(name, _)| name == key)
		.map(|(_, value)| value.into_owned())
		.filter(|value| !value.is_empty())
}

/// Seeds a token request body with the grant type and redirect URI every grant sends.
pub(crate) fn grant_body(grant_type: &str, redirect_uri: &str) -> RequestBody {
	RequestBody::new().with(FIELD_GRANT_TYPE, grant_type).with(FIELD_REDIRECT_URI, redirect_uri)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn query_value_takes_first_occurrence_and_treats_empty_as_absent() {
		let url = Url::parse("https://app.example.com/cb?code=one&code=two&state=")
			.expect("Callback fixture should parse.");

		assert_eq!(query_value(&url, "code").as_deref(), Some("one"));

		let url = Url::parse("https://app.example.com/cb?code=&code=two")
			.expect("Callback fixture should parse.");

		assert_eq!(query_value(&url, "code"), None);
		assert_eq!(query_value(&url, "state"), None);
		assert_eq!(query_value(&url, "missing"), None);
	}

	#[test]
	fn scopes_join_in_caller_order() {
		let scopes = vec!["b".to_owned(), "a".to_owned(), "c".to_owned()];

		assert_eq!(join_scopes(&scopes), "b a c");
		assert_eq!(join_scopes(&[]), "");
	}
}
