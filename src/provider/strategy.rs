//! Strategy adapter that plugs Flickr into a generic OAuth 1.0a client.
//!
//! [`FlickrStrategy`] owns the client instead of extending it: construction completes
//! the options with Flickr defaults, builds the client through
//! [`OAuth1Client::build`], and injects [`FlickrProfile`] as the client's profile hook.

// self
use crate::{
	_prelude::*,
	auth::AccessCredentials,
	oauth::{OAuth1Client, OAuth1Config, StrategyHooks, TokenParams, UserProfile, VerifyCallback},
	obs::{self, Operation, Outcome, StrategySpan},
	provider::{FlickrOptions, FlickrProfile, PROVIDER_NAME, Profile},
};

/// Authentication strategy as seen by a middleware framework.
///
/// Frameworks register strategies by [`Strategy::name`] and call the inherited
/// [`UserProfile::user_profile`] hook through the strategy's client.
pub trait Strategy
where
	Self: UserProfile,
{
	/// Stable name the strategy is registered under.
	fn name(&self) -> &str;
}

/// Flickr authentication strategy.
///
/// Applications supply a verify callback receiving the access token pair and the
/// normalized [`Profile`], returning the application user (or `None` to reject the
/// credentials).
#[derive(Clone)]
pub struct FlickrStrategy<C> {
	name: &'static str,
	config: OAuth1Config,
	client: C,
}
impl<C> FlickrStrategy<C>
where
	C: OAuth1Client,
{
	/// Completes `options` with Flickr defaults and builds the underlying client.
	///
	/// Any error comes from [`OAuth1Client::build`]; the strategy itself does not
	/// validate the options.
	pub fn new<V>(options: FlickrOptions, verify: V) -> Result<Self>
	where
		V: 'static + VerifyCallback<C::User>,
	{
		Self::with_verify(options, Arc::new(verify))
	}

	/// Same as [`FlickrStrategy::new`] for an already shared verify callback.
	pub fn with_verify(
		options: FlickrOptions,
		verify: Arc<dyn VerifyCallback<C::User>>,
	) -> Result<Self> {
		let _guard = StrategySpan::new(Operation::Construct, "new").entered();

		obs::record_outcome(Operation::Construct, Outcome::Attempt);

		let config = options.into_config();
		let hooks = StrategyHooks::new(verify, Arc::new(FlickrProfile));

		match C::build(config.clone(), hooks) {
			Ok(client) => {
				obs::record_outcome(Operation::Construct, Outcome::Success);

				Ok(Self { name: PROVIDER_NAME, config, client })
			},
			Err(e) => {
				obs::record_outcome(Operation::Construct, Outcome::Failure);

				Err(e)
			},
		}
	}
}
impl<C> FlickrStrategy<C> {
	/// Completed configuration forwarded to the client.
	pub fn config(&self) -> &OAuth1Config {
		&self.config
	}

	/// Underlying OAuth 1.0a client.
	pub fn client(&self) -> &C {
		&self.client
	}

	/// Consumes the strategy, returning the client.
	pub fn into_client(self) -> C {
		self.client
	}
}
impl<C> UserProfile for FlickrStrategy<C>
where
	C: Send + Sync,
{
	fn user_profile(
		&self,
		credentials: &AccessCredentials,
		params: Option<&TokenParams>,
	) -> Result<Profile> {
		FlickrProfile.user_profile(credentials, params)
	}
}
impl<C> Strategy for FlickrStrategy<C>
where
	C: Send + Sync,
{
	fn name(&self) -> &str {
		self.name
	}
}
impl<C> Debug for FlickrStrategy<C> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FlickrStrategy")
			.field("name", &self.name)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
