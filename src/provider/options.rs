//! Strategy options and the Flickr defaults applied to them.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, Secret},
	error::ConfigError,
	oauth::{OAuth1Config, OAuth1Endpoints},
};

/// Default endpoint issuing request tokens.
pub const DEFAULT_REQUEST_TOKEN_URL: &str = "http://www.flickr.com/services/oauth/request_token";
/// Default endpoint exchanging authorized request tokens.
pub const DEFAULT_ACCESS_TOKEN_URL: &str = "http://www.flickr.com/services/oauth/access_token";
/// Default authorization page; requests read permission.
pub const DEFAULT_USER_AUTHORIZATION_URL: &str =
	"http://www.flickr.com/services/oauth/authorize?perms=read";
/// Default session namespace for intermediate request tokens.
pub const DEFAULT_SESSION_KEY: &str = "oauth:flickr";

/// Options accepted by [`FlickrStrategy`](crate::provider::FlickrStrategy).
///
/// Field names on the wire follow the conventional strategy option keys
/// (`consumerKey`, `callbackURL`, ...). Unset or empty endpoint and session values fall
/// back to the Flickr defaults in [`FlickrOptions::into_config`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FlickrOptions {
	/// Identifies the application to Flickr.
	#[serde(rename = "consumerKey")]
	pub consumer_key: String,
	/// Proves ownership of the consumer key.
	#[serde(rename = "consumerSecret")]
	pub consumer_secret: Secret,
	/// URL Flickr redirects to after authorization.
	#[serde(rename = "callbackURL", default)]
	pub callback_url: Option<String>,
	/// Request token endpoint override.
	#[serde(rename = "requestTokenURL", default)]
	pub request_token_url: Option<String>,
	/// Access token endpoint override.
	#[serde(rename = "accessTokenURL", default)]
	pub access_token_url: Option<String>,
	/// Authorization page override.
	#[serde(rename = "userAuthorizationURL", default)]
	pub user_authorization_url: Option<String>,
	/// Session namespace override.
	#[serde(rename = "sessionKey", default)]
	pub session_key: Option<String>,
}
impl FlickrOptions {
	/// Creates options carrying only the consumer credentials.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			callback_url: None,
			request_token_url: None,
			access_token_url: None,
			user_authorization_url: None,
			session_key: None,
		}
	}

	/// Loads options from a JSON document.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);
		let options = serde_path_to_error::deserialize(&mut de)?;

		de.end().map_err(ConfigError::Json)?;

		Ok(options)
	}

	/// Loads options from an already parsed JSON value.
	pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
		Ok(serde_path_to_error::deserialize(value)?)
	}

	/// Sets the callback URL.
	pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
		self.callback_url = Some(url.into());

		self
	}

	/// Overrides the request token endpoint.
	pub fn with_request_token_url(mut self, url: impl Into<String>) -> Self {
		self.request_token_url = Some(url.into());

		self
	}

	/// Overrides the access token endpoint.
	pub fn with_access_token_url(mut self, url: impl Into<String>) -> Self {
		self.access_token_url = Some(url.into());

		self
	}

	/// Overrides the authorization page.
	pub fn with_user_authorization_url(mut self, url: impl Into<String>) -> Self {
		self.user_authorization_url = Some(url.into());

		self
	}

	/// Overrides the session namespace.
	pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
		self.session_key = Some(key.into());

		self
	}

	/// Completes the options with Flickr defaults.
	///
	/// Supplied values are kept verbatim; only missing or empty ones are replaced.
	pub fn into_config(self) -> OAuth1Config {
		OAuth1Config {
			consumer: ConsumerCredentials::new(self.consumer_key, self.consumer_secret),
			callback_url: self.callback_url,
			endpoints: OAuth1Endpoints {
				request_token: or_default(self.request_token_url, DEFAULT_REQUEST_TOKEN_URL),
				access_token: or_default(self.access_token_url, DEFAULT_ACCESS_TOKEN_URL),
				user_authorization: or_default(
					self.user_authorization_url,
					DEFAULT_USER_AUTHORIZATION_URL,
				),
			},
			session_key: or_default(self.session_key, DEFAULT_SESSION_KEY),
		}
	}
}

fn or_default(value: Option<String>, default: &str) -> String {
	value.filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_owned())
}
