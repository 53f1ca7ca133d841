//! Crate-level error types shared across configuration, flows, and the token exchange.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS), carrying the transport's own error as the source.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Redirect callback did not carry a usable `code` parameter.
	#[error("Missing authorization code in callback URL: {callback}.")]
	MissingAuthorizationCode {
		/// Callback URL that was inspected.
		callback: String,
	},
	/// CSRF check failed: the callback `state` differs from the one sent with the consent URL.
	#[error("Authorization state mismatch: expected `{expected}`, got `{actual}`.")]
	StateMismatch {
		/// State configured on the flow (empty when none was requested).
		expected: String,
		/// State returned on the callback (empty when absent).
		actual: String,
	},
	/// Token endpoint answered with a non-success HTTP status.
	#[error("Token endpoint returned HTTP {status}{}.", describe_oauth_error(.error.as_deref(), .description.as_deref()))]
	AuthServer {
		/// HTTP status code.
		status: u16,
		/// OAuth `error` code, when the body carried one.
		error: Option<String>,
		/// OAuth `error_description`, when the body carried one.
		description: Option<String>,
	},
	/// Token endpoint responded with a body that is not a valid token document.
	#[error("Token endpoint returned a malformed token response.")]
	MalformedResponse {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}

impl Error {
	/// Stable snake_case label naming the variant, used for span fields and metric labels.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::Transport(_) => "transport",
			Self::MissingAuthorizationCode { .. } => "missing_authorization_code",
			Self::StateMismatch { .. } => "state_mismatch",
			Self::AuthServer { .. } => "auth_server",
			Self::MalformedResponse { .. } => "malformed_response",
		}
	}

	/// HTTP status of the token endpoint response that caused the error, if one was received.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::AuthServer { status, .. } | Self::MalformedResponse { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed (e.g. credentials that are not valid header bytes).
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Configured base URL cannot be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending base URL.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Configured base URL has no hierarchical path (e.g. `mailto:`).
	#[error("Base URL `{url}` cannot carry an endpoint path.")]
	BaseUrlCannotBeABase {
		/// Offending base URL.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failure reported by the injected transport.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific error, left untouched for downcasting.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

fn describe_oauth_error(error: Option<&str>, description: Option<&str>) -> String {
	match (error, description) {
		(Some(error), Some(description)) => format!(" ({error}: {description})"),
		(Some(error), None) => format!(" ({error})"),
		(None, Some(description)) => format!(" ({description})"),
		(None, None) => String::new(),
	}
}
