//! Optional observability for token operations.
//!
//! # Feature Flags
//!
//! - `tracing`: every operation runs inside an `ebay_oauth2.flow` span carrying `flow` and
//!   `stage`. When it finishes the span also gets `outcome`, and on failure `error` (the
//!   [`Error::kind`] label) plus `http.status` when the token endpoint answered.
//! - `metrics`: each finished operation increments `ebay_oauth2_flow_total`, labeled by
//!   `flow`, `outcome` and `error` (`none` on success).
//!
//! Errors are returned to the caller untouched; nothing here logs them.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// Grant flows observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Authorization Code flow.
	AuthorizationCode,
	/// Client Credentials flow.
	ClientCredentials,
}
impl FlowKind {
	/// Label used for the `flow` field.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::AuthorizationCode => "authorization_code",
			FlowKind::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// How a flow operation finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// The operation produced its value.
	Success,
	/// The operation returned an [`Error`].
	Failure,
}
impl FlowOutcome {
	/// Classifies a finished operation.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(_) => Self::Failure,
		}
	}

	/// Label used for the `outcome` field.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `error` label of a finished operation: the error kind, or `none`.
pub fn error_label<T>(result: &Result<T>) -> &'static str {
	result.as_ref().err().map_or("none", Error::kind)
}

/// Runs a token operation inside its flow span and records how it finished.
pub(crate) async fn observe<T, Fut>(
	kind: FlowKind,
	stage: &'static str,
	operation: Fut,
) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = FlowSpan::new(kind, stage);
	let result = span.instrument(operation).await;

	span.record_result(&result);
	record_flow_result(kind, &result);

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcome_and_error_labels_follow_result() {
		let ok: Result<()> = Ok(());
		let err: Result<()> = Err(Error::MissingAuthorizationCode { callback: "https://cb".into() });

		assert_eq!(FlowOutcome::of(&ok), FlowOutcome::Success);
		assert_eq!(error_label(&ok), "none");
		assert_eq!(FlowOutcome::of(&err).to_string(), "failure");
		assert_eq!(error_label(&err), "missing_authorization_code");
	}

	#[tokio::test]
	async fn observe_returns_operation_result() {
		let value = observe(FlowKind::ClientCredentials, "access_token", async { Ok(7) })
			.await
			.expect("Successful operation should pass through.");

		assert_eq!(value, 7);

		let err = observe::<(), _>(FlowKind::AuthorizationCode, "exchange", async {
			Err(Error::AuthServer { status: 400, error: None, description: None })
		})
		.await
		.expect_err("Failed operation should pass through.");

		assert_eq!(err.http_status(), Some(400));
	}
}
