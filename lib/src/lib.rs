//! Client for the Key Vault secrets API.
//!
//! Every operation is a method on [`Client`], issuing a single request
//! authenticated with a bearer token and decoding the JSON response.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use keyvault::{Client, Credentials};
//!
//! let client = Client::new("https://vault.example.com/api", Credentials::bearer("my-token"))?;
//! let value = client.get_key_by_name("folder-id", "DB_URL").await?;
//! println!("{value}");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::time::Duration;

pub mod builder;
pub mod credentials;
pub mod error;
pub mod folder;
pub mod general;
pub mod key;
mod request;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use error::Error;

/// Result type returned by every client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The request deadline used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Key Vault REST API.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    credentials: Credentials,
    timeout: Duration,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client for the given API base url, e.g. `https://vault.example.com/api`.
    ///
    /// # Errors
    ///
    /// Returns a [`builder::Error`] if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }

    /// The base url every request is prefixed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The deadline applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
