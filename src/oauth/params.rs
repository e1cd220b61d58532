//! Raw parameters returned by the provider alongside the access token.

// crates.io
use serde_json::Value;
use url::form_urlencoded;
// self
use crate::{
	_prelude::*, auth::AccessCredentials, error::ProfileError, provider::profile::PROFILE_KEYS,
};

/// Flat string mapping of provider parameters.
///
/// Flickr answers the access-token exchange with a form-encoded body such as
/// `fullname=John%20Doe&oauth_token=...&oauth_token_secret=...&user_nsid=12345%40N00&username=jdoe`;
/// clients hand the decoded pairs to the profile hook unchanged.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenParams(BTreeMap<String, String>);
impl TokenParams {
	/// Parameter carrying the access token.
	pub const OAUTH_TOKEN: &'static str = "oauth_token";
	/// Parameter carrying the token secret.
	pub const OAUTH_TOKEN_SECRET: &'static str = "oauth_token_secret";

	/// Decodes an `application/x-www-form-urlencoded` response body.
	///
	/// Repeated keys keep the last value.
	pub fn from_form(body: &str) -> Self {
		form_urlencoded::parse(body.trim().as_bytes()).into_owned().collect()
	}

	/// Converts a JSON object of string values.
	///
	/// `null` values count as absent. Non-string values are dropped unless they sit under a
	/// key the profile reads, where they are rejected.
	pub fn from_json(value: Value) -> Result<Self, ProfileError> {
		let object = match value {
			Value::Object(object) => object,
			Value::Null => return Err(ProfileError::MissingParams),
			other => {
				return Err(ProfileError::MalformedParams {
					reason: format!("expected an object, found {}", json_kind(&other)),
				});
			},
		};
		let mut params = BTreeMap::new();

		for (key, value) in object {
			match value {
				Value::String(text) => {
					params.insert(key, text);
				},
				Value::Null => {},
				_ if !PROFILE_KEYS.contains(&key.as_str()) => {},
				other => {
					return Err(ProfileError::MalformedParams {
						reason: format!("`{key}` must be a string, found {}", json_kind(&other)),
					});
				},
			}
		}

		Ok(Self(params))
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Inserts or replaces a value, returning the previous one.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Returns `true` when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Extracts the access token pair, when both halves are present.
	pub fn access_credentials(&self) -> Option<AccessCredentials> {
		let token = self.get(Self::OAUTH_TOKEN)?;
		let token_secret = self.get(Self::OAUTH_TOKEN_SECRET)?;

		Some(AccessCredentials::new(token, token_secret))
	}

	fn is_secret(key: &str) -> bool {
		key == Self::OAUTH_TOKEN || key == Self::OAUTH_TOKEN_SECRET
	}
}
impl<K, V> FromIterator<(K, V)> for TokenParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
impl Debug for TokenParams {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (key, value) in self.iter() {
			if Self::is_secret(key) {
				map.entry(&key, &"<redacted>");
			} else {
				map.entry(&key, &value);
			}
		}

		map.finish()
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
