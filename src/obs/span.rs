// self
use crate::{_prelude::*, obs::Operation, provider::PROVIDER_NAME};

/// A span builder used by strategy operations.
#[derive(Clone, Debug)]
pub struct StrategySpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StrategySpan {
	/// Creates a new span tagged with the provider, operation, and stage.
	///
	/// The `identified` field stays empty until [`StrategySpan::record_identified`] runs.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth1_flickr.strategy",
				provider = PROVIDER_NAME,
				operation = operation.as_str(),
				stage,
				identified = tracing::field::Empty
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage, PROVIDER_NAME);

			Self {}
		}
	}

	/// Records whether the normalized profile carries a Flickr NSID.
	pub fn record_identified(&self, identified: bool) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("identified", identified);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = identified;
		}
	}

	/// Enters the span for the remainder of the current scope.
	pub fn entered(self) -> StrategySpanGuard {
		#[cfg(feature = "tracing")]
		{
			StrategySpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			StrategySpanGuard {}
		}
	}
}

/// RAII guard returned by [`StrategySpan::entered`].
pub struct StrategySpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for StrategySpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("StrategySpanGuard(..)")
	}
}
