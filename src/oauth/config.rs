//! Completed OAuth 1.0a configuration handed to the client.

// self
use crate::{_prelude::*, auth::ConsumerCredentials, error::ConfigError};

/// Endpoint set used by the OAuth 1.0a handshake.
///
/// Values are kept exactly as configured; call [`OAuth1Endpoints::parse`] when a typed
/// [`Url`] is needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth1Endpoints {
	/// Endpoint issuing temporary request tokens.
	pub request_token: String,
	/// Endpoint exchanging an authorized request token for an access token.
	pub access_token: String,
	/// Page the user is redirected to for authorization.
	pub user_authorization: String,
}
impl OAuth1Endpoints {
	/// Parses every endpoint into a [`Url`].
	pub fn parse(&self) -> Result<ParsedEndpoints, ConfigError> {
		Ok(ParsedEndpoints {
			request_token: parse_endpoint("request token", &self.request_token)?,
			access_token: parse_endpoint("access token", &self.access_token)?,
			user_authorization: parse_endpoint("user authorization", &self.user_authorization)?,
		})
	}
}

/// Typed counterpart of [`OAuth1Endpoints`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEndpoints {
	/// Endpoint issuing temporary request tokens.
	pub request_token: Url,
	/// Endpoint exchanging an authorized request token for an access token.
	pub access_token: Url,
	/// Page the user is redirected to for authorization.
	pub user_authorization: Url,
}

/// Immutable configuration consumed by [`OAuth1Client::build`](crate::oauth::OAuth1Client::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuth1Config {
	/// Application credentials.
	pub consumer: ConsumerCredentials,
	/// URL the provider redirects back to after authorization.
	pub callback_url: Option<String>,
	/// Handshake endpoints.
	pub endpoints: OAuth1Endpoints,
	/// Key namespacing the request tokens the client stores across the redirect.
	pub session_key: String,
}
impl OAuth1Config {
	/// Parses the callback URL, if one was configured.
	pub fn parsed_callback_url(&self) -> Result<Option<Url>, ConfigError> {
		self.callback_url.as_deref().map(|url| parse_endpoint("callback", url)).transpose()
	}
}

fn parse_endpoint(endpoint: &'static str, url: &str) -> Result<Url, ConfigError> {
	Url::parse(url).map_err(|source| ConfigError::InvalidEndpoint {
		endpoint,
		url: url.to_owned(),
		source,
	})
}
