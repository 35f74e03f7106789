use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no base url was provided.
    #[error("no base url provided")]
    MissingBaseUrl,
    /// Returned when the base url cannot be used as a prefix for the API endpoints.
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
    /// Returned when no credentials were provided.
    #[error("no credentials provided")]
    MissingCredentials,
    /// Returned when the timeout from the environment is not a number of seconds.
    #[error("invalid value {0:?} for KEY_VAULT_TIMEOUT")]
    InvalidTimeout(String),
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// ```rust
/// use keyvault::{ClientBuilder, Credentials};
/// use std::time::Duration;
///
/// let _client = ClientBuilder::default()
///     .with_base_url("https://vault.example.com/api")
///     .with_credentials(Credentials::bearer("my-token"))
///     .with_timeout(Duration::from_secs(5))
///     .build()
///     .expect("unable to build client");
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<Cow<'static, str>>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<crate::Credentials>,
    timeout: Option<Duration>,
}

fn timeout_from_env() -> Result<Option<Duration>, Error> {
    match std::env::var("KEY_VAULT_TIMEOUT") {
        Ok(value) => value
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| Error::InvalidTimeout(value)),
        Err(_) => Ok(None),
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `KEY_VAULT_API_URL` for the endpoint.
    /// - Uses `KEY_VAULT_TOKEN` for the credentials.
    /// - Uses `KEY_VAULT_TIMEOUT`, in seconds, for the request deadline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeout`] if `KEY_VAULT_TIMEOUT` is not a number.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            base_url: std::env::var("KEY_VAULT_API_URL").ok().map(Cow::Owned),
            client_builder: None,
            credentials: crate::Credentials::from_env(),
            timeout: timeout_from_env()?,
        })
    }
}

impl ClientBuilder {
    /// Sets the base url of the API.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = Some(base_url.into());
    }

    /// Sets the base url of the API and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets the deadline applied to every request.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Sets the deadline applied to every request and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBaseUrl`] if no base url was set.
    /// Returns [`Error::InvalidBaseUrl`] if the base url cannot prefix the endpoint paths.
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let base_url = self.base_url.ok_or(Error::MissingBaseUrl)?;
        match reqwest::Url::parse(&base_url) {
            Ok(url) if !url.cannot_be_a_base() => {}
            _ => return Err(Error::InvalidBaseUrl(base_url.into_owned())),
        }
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let timeout = self.timeout.unwrap_or(crate::DEFAULT_TIMEOUT);
        let inner = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT)
            .timeout(timeout)
            .build()?;
        let base_url = match base_url.strip_suffix('/') {
            Some(stripped) => Cow::Owned(stripped.to_string()),
            None => base_url,
        };
        Ok(crate::Client {
            base_url,
            credentials,
            timeout,
            inner,
        })
    }
}
