// self
use crate::{
	_prelude::*,
	obs::{self, FlowKind, FlowOutcome},
};

/// Counts a finished flow operation on the global recorder.
pub fn record_flow_result<T>(kind: FlowKind, result: &Result<T>) {
	let outcome = FlowOutcome::of(result);
	let error = obs::error_label(result);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"ebay_oauth2_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str(),
			"error" => error
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome, error);
	}
}
