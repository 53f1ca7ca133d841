// self
use crate::{_prelude::*, obs::FlowKind};
#[cfg(feature = "tracing")] use crate::obs::FlowOutcome;

/// Span wrapping one flow operation; inert without the `tracing` feature.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a span for `stage` of the `kind` flow. Result fields start empty.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			use tracing::field::Empty;

			let span = tracing::info_span!(
				"ebay_oauth2.flow",
				flow = kind.as_str(),
				stage,
				outcome = Empty,
				error = Empty,
				http.status = Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Runs synchronous work inside the span.
	pub fn in_scope<R>(&self, work: impl FnOnce() -> R) -> R {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(work)
		}
		#[cfg(not(feature = "tracing"))]
		{
			work()
		}
	}

	/// Attaches the span to `fut` without holding a guard across `.await`.
	pub fn instrument<Fut>(&self, fut: Fut) -> impl Future<Output = Fut::Output>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Fills `outcome`, and for failures `error` and `http.status` when known.
	pub fn record_result<T>(&self, result: &Result<T>) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", FlowOutcome::of(result).as_str());

			if let Err(e) = result {
				self.span.record("error", e.kind());

				if let Some(status) = e.http_status() {
					self.span.record("http.status", status);
				}
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = result;
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn in_scope_returns_work_output() {
		let span = FlowSpan::new(FlowKind::AuthorizationCode, "grant_application_access_url");

		assert_eq!(span.in_scope(|| "consent"), "consent");
	}

	#[test]
	fn recording_failures_accepts_every_error_shape() {
		let span = FlowSpan::new(FlowKind::ClientCredentials, "access_token");

		span.record_result::<()>(&Err(Error::AuthServer {
			status: 503,
			error: Some("temporarily_unavailable".into()),
			description: None,
		}));
		span.record_result::<()>(&Err(Error::StateMismatch {
			expected: "s1".into(),
			actual: String::new(),
		}));
		span.record_result(&Ok(()));
	}

	#[tokio::test]
	async fn instrument_passes_output_through() {
		let span = FlowSpan::new(FlowKind::ClientCredentials, "access_token");

		assert_eq!(span.instrument(async { 42 }).await, 42);
	}
}
