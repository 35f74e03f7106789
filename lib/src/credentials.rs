//! The credentials used to authenticate with the Key Vault API.

use std::fmt;

/// The bearer token attached to every request
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Creates the credentials based on the environment variables
    ///
    /// When `KEY_VAULT_TOKEN` is set, `Some(Credentials)` will be created, otherwise `None` is returned.
    ///
    /// ```rust
    /// use keyvault::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses a bearer token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("KEY_VAULT_TOKEN").ok().map(Self::bearer)
    }

    pub fn bearer<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn debug_should_hide_token() {
        let creds = Credentials::bearer("tok_secret");
        let output = format!("{creds:?}");
        assert!(!output.contains("tok_secret"));
    }
}
