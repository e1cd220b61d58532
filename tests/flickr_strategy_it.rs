// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// self
use oauth1_flickr::{
	auth::AccessCredentials,
	error::{Error, ProfileError, Result},
	oauth::{OAuth1Client, OAuth1Config, StrategyHooks, TokenParams, VerifyCallback},
	provider::{
		DEFAULT_ACCESS_TOKEN_URL, DEFAULT_REQUEST_TOKEN_URL, DEFAULT_SESSION_KEY,
		DEFAULT_USER_AUTHORIZATION_URL, FlickrOptions, FlickrStrategy, Profile, Strategy,
	},
};

const ACCESS_TOKEN_BODY: &str = "fullname=John%20Doe&oauth_token=72157626318069415-087bfc7b5816092c&oauth_token_secret=a202d1f853ec69de&user_nsid=12345%40N00&username=jdoe";

#[derive(Debug, PartialEq, Eq)]
struct User {
	nsid: String,
	name: Option<String>,
}

/// Stands in for a generic OAuth 1.0a client: it records its configuration and replays the
/// tail of the handshake from a canned access-token response.
struct RecordingClient {
	config: OAuth1Config,
	hooks: StrategyHooks<User>,
	completed: AtomicUsize,
}
impl RecordingClient {
	fn complete(&self, access_token_body: &str) -> Result<Option<User>> {
		let params = TokenParams::from_form(access_token_body);
		let credentials = params
			.access_credentials()
			.unwrap_or_else(|| AccessCredentials::new("missing", "missing"));

		self.completed.fetch_add(1, Ordering::SeqCst);
		self.hooks.resolve_user(&credentials, Some(&params))
	}
}
impl OAuth1Client for RecordingClient {
	type User = User;

	fn build(config: OAuth1Config, hooks: StrategyHooks<Self::User>) -> Result<Self> {
		config.endpoints.parse()?;

		Ok(Self { config, hooks, completed: AtomicUsize::new(0) })
	}
}

fn verify(_: &AccessCredentials, profile: Profile) -> Result<Option<User>> {
	Ok(profile.id.map(|nsid| User { nsid, name: profile.full_name }))
}

fn options() -> FlickrOptions {
	FlickrOptions::new("123-456-789", "shhh-its-a-secret")
		.with_callback_url("https://www.example.net/auth/flickr/callback")
}

#[test]
fn construction_defaults_every_endpoint_and_session_key() -> color_eyre::Result<()> {
	let strategy = <FlickrStrategy<RecordingClient>>::new(options(), verify)?;
	let config = &strategy.client().config;

	assert_eq!(strategy.name(), "flickr");
	assert_eq!(config.endpoints.request_token, DEFAULT_REQUEST_TOKEN_URL);
	assert_eq!(config.endpoints.access_token, DEFAULT_ACCESS_TOKEN_URL);
	assert_eq!(config.endpoints.user_authorization, DEFAULT_USER_AUTHORIZATION_URL);
	assert_eq!(config.session_key, DEFAULT_SESSION_KEY);
	assert_eq!(config.consumer.key, "123-456-789");
	assert_eq!(config.consumer.secret.expose(), "shhh-its-a-secret");
	assert_eq!(
		config.callback_url.as_deref(),
		Some("https://www.example.net/auth/flickr/callback")
	);

	Ok(())
}

#[test]
fn construction_keeps_every_supplied_subset() {
	const REQUEST: &str = "https://proxy.example.com/oauth/request_token";
	const ACCESS: &str = "https://proxy.example.com/oauth/access_token";
	const AUTHORIZE: &str = "https://proxy.example.com/oauth/authorize?perms=write";
	const SESSION: &str = "oauth:flickr:proxy";

	for mask in 0_u8..16 {
		let mut options = options();

		if mask & 0b0001 != 0 {
			options = options.with_request_token_url(REQUEST);
		}
		if mask & 0b0010 != 0 {
			options = options.with_access_token_url(ACCESS);
		}
		if mask & 0b0100 != 0 {
			options = options.with_user_authorization_url(AUTHORIZE);
		}
		if mask & 0b1000 != 0 {
			options = options.with_session_key(SESSION);
		}

		let strategy = <FlickrStrategy<RecordingClient>>::new(options, verify)
			.expect("Strategy should build for every option subset.");
		let config = &strategy.client().config;
		let pick = |bit: u8, supplied: &'static str, default: &'static str| {
			if mask & bit != 0 { supplied } else { default }
		};

		assert_eq!(
			config.endpoints.request_token,
			pick(0b0001, REQUEST, DEFAULT_REQUEST_TOKEN_URL)
		);
		assert_eq!(config.endpoints.access_token, pick(0b0010, ACCESS, DEFAULT_ACCESS_TOKEN_URL));
		assert_eq!(
			config.endpoints.user_authorization,
			pick(0b0100, AUTHORIZE, DEFAULT_USER_AUTHORIZATION_URL)
		);
		assert_eq!(config.session_key, pick(0b1000, SESSION, DEFAULT_SESSION_KEY));
	}
}

#[test]
fn client_build_failures_surface_from_construction() {
	let err = <FlickrStrategy<RecordingClient>>::new(
		options().with_access_token_url("flickr.com/services/oauth/access_token"),
		verify,
	)
	.expect_err("Relative access token URL should be rejected by the client.");

	assert!(err.to_string().contains("access token endpoint is not a valid URL"));
}

#[test]
fn handshake_completion_resolves_the_application_user() -> color_eyre::Result<()> {
	let strategy = <FlickrStrategy<RecordingClient>>::new(options(), verify)?;
	let user = strategy.client().complete(ACCESS_TOKEN_BODY)?;

	assert_eq!(user, Some(User { nsid: "12345@N00".into(), name: Some("John Doe".into()) }));
	assert_eq!(strategy.client().completed.load(Ordering::SeqCst), 1);

	Ok(())
}

#[test]
fn handshake_without_identity_is_rejected_by_verify() -> color_eyre::Result<()> {
	let strategy = <FlickrStrategy<RecordingClient>>::new(options(), verify)?;
	let user = strategy.client().complete("oauth_token=t&oauth_token_secret=s&username=jdoe")?;

	assert_eq!(user, None);

	Ok(())
}

#[test]
fn strategies_share_one_verify_callback() {
	let verify: Arc<dyn VerifyCallback<User>> = Arc::new(verify);
	let first = <FlickrStrategy<RecordingClient>>::with_verify(options(), verify.clone())
		.expect("First strategy should build.");
	let second = <FlickrStrategy<RecordingClient>>::with_verify(
		options().with_session_key("oauth:flickr:second"),
		verify,
	)
	.expect("Second strategy should build.");

	assert_eq!(first.config().session_key, DEFAULT_SESSION_KEY);
	assert_eq!(second.config().session_key, "oauth:flickr:second");
}

#[test]
fn profile_failures_never_reach_verify() {
	let reject = |_: &AccessCredentials, _: Profile| -> Result<Option<User>> {
		panic!("Verify must not run when the profile cannot be built.")
	};
	let strategy = <FlickrStrategy<RecordingClient>>::new(options(), reject)
		.expect("Strategy should build.");
	let err = strategy
		.client()
		.hooks
		.resolve_user(&AccessCredentials::new("token", "token-secret"), None)
		.expect_err("Missing params should fail.");

	assert!(matches!(err, Error::Profile(ProfileError::MissingParams)));
}
