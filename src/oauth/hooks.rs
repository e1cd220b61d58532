//! Callbacks the OAuth 1.0a client invokes once the access token is known.

// self
use crate::{
	_prelude::*,
	auth::AccessCredentials,
	oauth::TokenParams,
	obs::{self, Operation, Outcome, StrategySpan},
	provider::Profile,
};

/// Maps the provider's raw parameters into a normalized [`Profile`].
///
/// The token pair is passed for providers that need a follow-up request; the client has
/// already used it to obtain `params`.
pub trait UserProfile
where
	Self: Send + Sync,
{
	/// Builds the profile, returning an error instead of panicking on bad input.
	fn user_profile(
		&self,
		credentials: &AccessCredentials,
		params: Option<&TokenParams>,
	) -> Result<Profile>;
}

/// Application callback mapping an authenticated identity onto an application user.
///
/// Returning `Ok(None)` rejects the credentials without signalling a failure.
pub trait VerifyCallback<U>
where
	Self: Send + Sync,
{
	/// Looks up or creates the application user for `profile`.
	fn verify(&self, credentials: &AccessCredentials, profile: Profile) -> Result<Option<U>>;
}
impl<U, F> VerifyCallback<U> for F
where
	F: Send + Sync + Fn(&AccessCredentials, Profile) -> Result<Option<U>>,
{
	fn verify(&self, credentials: &AccessCredentials, profile: Profile) -> Result<Option<U>> {
		self(credentials, profile)
	}
}

/// Hooks a strategy injects into its OAuth 1.0a client.
pub struct StrategyHooks<U> {
	/// Application verify callback.
	pub verify: Arc<dyn VerifyCallback<U>>,
	/// Provider profile mapping.
	pub profile: Arc<dyn UserProfile>,
}
impl<U> StrategyHooks<U> {
	/// Bundles a verify callback with a profile hook.
	pub fn new(verify: Arc<dyn VerifyCallback<U>>, profile: Arc<dyn UserProfile>) -> Self {
		Self { verify, profile }
	}

	/// Runs the profile hook and then the verify callback.
	///
	/// Profile failures short-circuit; the verify callback never sees a partial profile.
	pub fn resolve_user(
		&self,
		credentials: &AccessCredentials,
		params: Option<&TokenParams>,
	) -> Result<Option<U>> {
		let profile = self.profile.user_profile(credentials, params)?;
		let _guard = StrategySpan::new(Operation::Verify, "resolve_user").entered();

		obs::record_outcome(Operation::Verify, Outcome::Attempt);

		match self.verify.verify(credentials, profile) {
			Ok(user) => {
				obs::record_outcome(Operation::Verify, Outcome::Success);

				Ok(user)
			},
			Err(e) => {
				obs::record_outcome(Operation::Verify, Outcome::Failure);

				Err(e)
			},
		}
	}
}
impl<U> Clone for StrategyHooks<U> {
	fn clone(&self) -> Self {
		Self { verify: Arc::clone(&self.verify), profile: Arc::clone(&self.profile) }
	}
}
impl<U> Debug for StrategyHooks<U> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("StrategyHooks(..)")
	}
}
