//! Strategy-level error types shared across configuration, profile mapping, and the
//! OAuth client contract.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider response could not be normalized into a profile.
	#[error(transparent)]
	Profile(#[from] ProfileError),

	/// The OAuth 1.0a client rejected its configuration or failed the handshake.
	#[error("OAuth client failed.")]
	Client {
		/// Client-specific failure.
		#[source]
		source: BoxError,
	},
	/// The application's verify callback failed.
	#[error("Verify callback failed.")]
	Verify {
		/// Application-specific failure.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a failure raised by an [`OAuth1Client`](crate::oauth::OAuth1Client).
	pub fn client(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Client { source: Box::new(src) }
	}

	/// Wraps a failure raised by a [`VerifyCallback`](crate::oauth::VerifyCallback).
	pub fn verify(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Verify { source: Box::new(src) }
	}
}

/// Configuration failures raised while loading options or parsing endpoints.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Options could not be deserialized.
	#[error("Strategy options are invalid at `{}`.", .0.path())]
	Deserialize(#[from] serde_path_to_error::Error<serde_json::Error>),
	/// The options document is followed by trailing content.
	#[error("Strategy options are not a single JSON document.")]
	Json(#[source] serde_json::Error),
	/// An endpoint string is not a valid URL.
	#[error("The {endpoint} endpoint is not a valid URL: {url}.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Raw endpoint value.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Failures raised while building a normalized profile.
#[derive(Debug, ThisError)]
pub enum ProfileError {
	/// No provider parameters were supplied.
	#[error("Provider parameters are missing.")]
	MissingParams,
	/// Provider parameters are not a flat string mapping.
	#[error("Provider parameters are malformed: {reason}.")]
	MalformedParams {
		/// Human-readable cause.
		reason: String,
	},
}
