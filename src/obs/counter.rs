// self
use crate::{
	obs::{Operation, Outcome},
	provider::PROVIDER_NAME,
};

/// Records a provider-labeled operation outcome via the global metrics recorder (when
/// enabled).
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_flickr_strategy_total",
			"provider" => PROVIDER_NAME,
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome, PROVIDER_NAME);
	}
}
