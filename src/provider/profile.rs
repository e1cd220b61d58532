//! Normalized Flickr user profile.

// self
use crate::{
	_prelude::*,
	auth::AccessCredentials,
	error::ProfileError,
	oauth::{TokenParams, UserProfile},
	obs::{self, Operation, Outcome, StrategySpan},
	provider::PROVIDER_NAME,
};

const USER_NSID: &str = "user_nsid";
const USERNAME: &str = "username";
const FULLNAME: &str = "fullname";

/// Raw keys the profile is built from.
pub(crate) const PROFILE_KEYS: [&str; 3] = [USER_NSID, USERNAME, FULLNAME];

/// Provider-agnostic profile built from the access-token response.
///
/// Identity fields are copied verbatim and stay `None` when Flickr omits them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	/// Source provider, always `flickr`.
	pub provider: String,
	/// Flickr NSID (`user_nsid`).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Screen name (`username`).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	/// Full name (`fullname`).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub full_name: Option<String>,
}
impl Profile {
	/// Normalizes the raw parameters.
	pub fn from_params(params: Option<&TokenParams>) -> Result<Self, ProfileError> {
		let params = params.ok_or(ProfileError::MissingParams)?;
		let field = |key: &str| params.get(key).map(ToOwned::to_owned);

		Ok(Self {
			provider: PROVIDER_NAME.into(),
			id: field(USER_NSID),
			display_name: field(USERNAME),
			full_name: field(FULLNAME),
		})
	}
}

/// [`UserProfile`] hook for Flickr.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlickrProfile;
impl UserProfile for FlickrProfile {
	fn user_profile(
		&self,
		_credentials: &AccessCredentials,
		params: Option<&TokenParams>,
	) -> Result<Profile> {
		let span = StrategySpan::new(Operation::UserProfile, "user_profile");
		let _guard = span.clone().entered();

		obs::record_outcome(Operation::UserProfile, Outcome::Attempt);

		match Profile::from_params(params) {
			Ok(profile) => {
				span.record_identified(profile.id.is_some());
				obs::record_outcome(Operation::UserProfile, Outcome::Success);

				Ok(profile)
			},
			Err(e) => {
				obs::record_outcome(Operation::UserProfile, Outcome::Failure);

				Err(e.into())
			},
		}
	}
}
