//! Consumer and access token pairs.

// self
use crate::{_prelude::*, auth::Secret};

/// Application credentials registered with the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerCredentials {
	/// Identifies the calling application to the provider.
	pub key: String,
	/// Proves ownership of the consumer key.
	pub secret: Secret,
}
impl ConsumerCredentials {
	/// Pairs a consumer key with its secret.
	pub fn new(key: impl Into<String>, secret: impl Into<Secret>) -> Self {
		Self { key: key.into(), secret: secret.into() }
	}
}

/// Access token pair issued at the end of the OAuth 1.0a handshake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessCredentials {
	/// Access token (`oauth_token`).
	pub token: Secret,
	/// Token secret (`oauth_token_secret`).
	pub token_secret: Secret,
}
impl AccessCredentials {
	/// Pairs an access token with its secret.
	pub fn new(token: impl Into<Secret>, token_secret: impl Into<Secret>) -> Self {
		Self { token: token.into(), token_secret: token_secret.into() }
	}
}
impl Display for AccessCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("AccessCredentials(<redacted>)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn credentials_never_print_secrets() {
		let consumer = ConsumerCredentials::new("123-456-789", "shhh-its-a-secret");
		let access = AccessCredentials::new("token", "token-secret");

		assert!(!format!("{consumer:?}").contains("shhh-its-a-secret"));
		assert!(!format!("{access:?}").contains("token-secret"));
		assert_eq!(access.to_string(), "AccessCredentials(<redacted>)");
	}
}
